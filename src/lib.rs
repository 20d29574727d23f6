#![cfg_attr(not(test), no_std)]
//! This crate provides a software implementation of
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf), together with an exact
//! fixed-point accumulator (the *quire*) and fused dot products built on top of it.
//!
//! # Background
//!
//! A posit is a tapered-precision number format: an `N`-bit pattern holds a sign, a *regime* (a
//! run of equal bits whose length sets a coarse power of `2^(2^ES)`), up to `ES` exponent bits,
//! and the fraction bits that remain. Numbers near `1.0` get the most fraction bits; the extremes
//! of the range get the fewest. Every bit pattern is a distinct value except one, NaR ("not a
//! real"), which stands in for every undefined result, and there is only one zero.
//!
//! See the [2022 posit standard](https://posithub.org/docs/posit_standard-2.pdf) for the format
//! and the operations it requires; the names of those operations are quoted in the docs of the
//! items that implement them.
//!
//! The crate has four parts:
//!
//!   - The bit-field codec ([`Posit::fields`], [`Posit::from_fields`], [`Posit::to_binary`]),
//!     which takes a bit pattern apart into sign, regime, exponent, and fraction and puts it back
//!     together.
//!   - The value engine: [`Posit`] itself, with correctly rounded `+ - * /`,
//!     [`sqrt`](Posit::sqrt), [`reciprocal`](Posit::reciprocal) and [`fma`], conversions to and
//!     from native numbers and between posit types ([`Posit::convert`]), comparisons, and the
//!     [`Value`] intermediate used by all of them. The [`Policy`] type selects whether NaR and
//!     division by zero are reported as an [`Error`] or simply propagated.
//!   - The [`Quire`], which accumulates exact products ([`quire_mul`]) with no rounding at all.
//!   - Fused dot products ([`Quire::fdp`], [`Quire::fdp_stride`], [`Quire::fdp_qc`]), rounding
//!     only once at the very end.
//!
//! # Usage
//!
//! ```
//! use posit_quire::{p8, p16, p32, Posit, RoundFrom, RoundInto};
//!
//! // Any width up to 64 bits and any exponent size that fits, stored in a machine integer.
//! type P24 = Posit<24, 3, i32>;
//! assert_eq!(P24::round_from(0.375_f64).to_bits(), 0b0_01_110_1 << 17);
//!
//! // In from floats, ints and raw bits; rounding is always to nearest, ties to even.
//! let tau = p32::round_from(6.2831853_f64);
//! assert_eq!(p32::round_from(-3_i32), -p32::round_from(3.0_f32));
//! assert_eq!(p8::from_bits(0b0100_0000), p8::ONE);
//!
//! // The usual operators, and comparisons that follow the real values.
//! let half: p16 = 0.5_f64.round_into();
//! assert!(half * half + half == p16::round_from(0.75));
//! assert!(p16::MIN_POSITIVE < 1e-15_f32.round_into());
//! assert!(p16::NAR < p16::MIN);
//!
//! // And back out again, or into another posit type.
//! assert_eq!(f64::round_from(tau / p32::round_from(2)), f64::round_from(p32::round_from(3.14159265)));
//! assert_eq!(i32::round_from(tau), 6);
//! assert_eq!(tau.convert::<16, 2, i16>(), p16::round_from(6.2831853_f64));
//! ```
//!
//! Exact dot products:
//!
//! ```
//! use posit_quire::{p16, q16, Policy, RoundFrom};
//!
//! let x = [p16::round_from(1e8), p16::ONE, p16::round_from(-1e8)];
//! let y = [p16::ONE, p16::ONE, p16::ONE];
//! let dot = q16::fdp(&x, &y, Policy::Propagate).unwrap();
//! assert_eq!(dot, p16::ONE);
//! ```

mod posit;
mod underlying;
mod error;
mod policy;

pub use posit::Posit;
pub use posit::fields::{Fields, Binary};
pub use posit::quire::{Quire, quire_size, quire_mul};
pub use posit::math::fma;
pub use posit::value::Value;
pub use underlying::Int;
pub use error::Error;
pub use policy::Policy;

/// The standard's 8-bit posit: `N = 8`, `ES = 2`.
#[allow(non_camel_case_types)]
pub type p8 = Posit<8, 2, i8>;

/// The standard's 16-bit posit: `N = 16`, `ES = 2`.
#[allow(non_camel_case_types)]
pub type p16 = Posit<16, 2, i16>;

/// The standard's 32-bit posit: `N = 32`, `ES = 2`.
#[allow(non_camel_case_types)]
pub type p32 = Posit<32, 2, i32>;

/// The standard's 64-bit posit: `N = 64`, `ES = 2`.
#[allow(non_camel_case_types)]
pub type p64 = Posit<64, 2, i64>;

/// The standard's quire for a [p8]: 128 bits, room for at least 2³⁰ - 1 products.
#[allow(non_camel_case_types)]
pub type q8 = Quire<8, 2, { quire_size(8, 2, 30) }>;

/// The standard's quire for a [p16]: 256 bits, room for at least 2³⁰ - 1 products.
#[allow(non_camel_case_types)]
pub type q16 = Quire<16, 2, { quire_size(16, 2, 30) }>;

/// The standard's quire for a [p32]: 512 bits, room for at least 2³⁰ - 1 products.
#[allow(non_camel_case_types)]
pub type q32 = Quire<32, 2, { quire_size(32, 2, 30) }>;

/// The standard's quire for a [p64]: 1024 bits, room for at least 2³⁰ - 1 products.
#[allow(non_camel_case_types)]
pub type q64 = Quire<64, 2, { quire_size(64, 2, 30) }>;

pub use posit::convert::{RoundFrom, RoundInto};

/// Number of cases for the `proptest` tests (more in release builds, where they run much faster).
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};

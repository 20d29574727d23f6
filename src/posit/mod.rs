//! The [`Posit`] type and everything built on it: the bit codec, rounding, arithmetic,
//! conversions, and the [quire](quire::Quire).
//!
//! Bits are numbered from 0 at the lsb (rightmost, least significant) to `N - 1` at the msb
//! (leftmost); "the top `n` bits" always means the `n` most significant ones.

/// An `N`-bit posit with up to `ES` exponent bits, held in the machine integer `Int`.
///
/// `Int` may be wider than `N`; the bits above `N` then copy the sign bit.
///
/// ```
/// # use posit_quire::Posit;
/// type Wide = Posit<32, 2, i32>;  // same as `p32`
/// type Narrow = Posit<6, 1, i8>;  // 6 bits in an `i8`
/// assert_eq!(Narrow::MAX.to_bits(), 0b011111);
/// assert_eq!(Narrow::NAR.to_bits(), -32);
/// assert!(Wide::MAX > Wide::ONE);
/// ```
///
/// Equality and ordering are those of the bit patterns read as two's complement integers. This is
/// the same as the order of the real values, with [NaR](Self::NAR) equal to itself and smaller
/// than every real.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]  // by bit pattern
pub struct Posit<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Int);

/// In a posit, the bits are interpreted as follows:
///
/// ```text
/// x = s r r r r r e e f f f f f f
///     | |       | | | |        |
///     | regime    exp fraction
///     sign
/// ```
///
/// A [`Decoded`] is the same number in a form that's easy to do arithmetic on: a fixed-point
/// `frac`tion in `[1, 2[` or `[-2, -1[` and a binary `exp`onent, such that the value of the posit
/// is `frac × 2^exp`.
///
/// `frac` is a fixed-point number with [`FRAC_WIDTH`](Self::FRAC_WIDTH) bits after the point.
/// This means that it always starts with `0b01` (positive) or `0b10` (negative); a `frac` like
/// that is called *normalised*. Note that negative numbers are *not* stored as a sign and a
/// magnitude: `-1.5 × 2^3` is `frac = 0b10_1000…` (i.e. -1.5) and `exp = 3`, while `-1.0 × 2^3`
/// is `frac = 0b10_0000…` (i.e. -2.0) and `exp = 2`.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub(crate) struct Decoded<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> {
  pub(crate) frac: Int,
  pub(crate) exp: Int,
}

/// Basics
mod basics;

/// Constants (zero, min, min_positive, etc)
mod consts;

/// Decoding a posit into a [`Decoded`].
mod decode;

/// Encoding a [`Decoded`] into a posit, with correct rounding.
mod encode;

/// Field-by-field view of a posit's bits (sign, regime, exponent, fraction).
pub(crate) mod fields;

/// The [`Value`](value::Value) intermediate, used for conversions and quire accumulation.
pub(crate) mod value;

/// Conversions to and from native numbers and other posit types.
pub(crate) mod convert;

/// Arithmetic operators.
mod ops;

/// Negation, absolute value, and next/prior.
mod unary;

/// Square root, reciprocal, and fused multiply-add.
pub(crate) mod math;

/// Formatting.
mod fmt;

/// The quire and fused dot products.
pub(crate) mod quire;


/// Arbitrary-precision oracle for tests.
#[cfg(test)]
mod rational;

//! Bit twiddling on the machine integers that hold posits. None of this is visible to users,
//! who only see the sealed [`Int`] trait, implemented for `i8`, `i16`, `i32` and `i64`; wider
//! intermediate results (products, quotients, the [`Value`](crate::Value)) go through `i128`.

/// A machine integer that can hold the bits of a posit: `i8`, `i16`, `i32` or `i64`.
///
/// This is a *sealed* trait.
pub trait Int: Sealed {}

use core::ops::{Add, BitAnd, BitOr, BitOrAssign, BitXor, Neg, Not, Shl, Shr, Sub};

/// Everything the posit code needs from its `Int`. Public only so that it can appear in bounds;
/// it can't be named from outside the crate.
pub trait Sealed: Copy + Default + Eq + Ord + core::hash::Hash
  + core::fmt::Debug + core::fmt::Display + core::fmt::Binary
  + Add<Output=Self> + Sub<Output=Self> + Neg<Output=Self>
  + Shl<u32, Output=Self> + Shr<u32, Output=Self>
  + BitAnd<Output=Self> + BitOr<Output=Self> + BitOrAssign + BitXor<Output=Self> + Not<Output=Self>
  + From<bool> + Into<i128>
{
  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;

  /// `self as u32`, for a `self` known to be small and non-negative.
  fn as_u32(self) -> u32;
  /// `x as Self`, for an `x` known to fit.
  fn of_u32(x: u32) -> Self;

  /// `x as Self`, keeping only the low `Self::BITS` bits.
  fn of_i128(x: i128) -> Self;

  /// `self >= 0`.
  fn is_positive(self) -> bool;
  fn abs(self) -> Self;

  /// Shift right, filling with zeros rather than copies of the sign.
  fn lshr(self, n: u32) -> Self;

  /// Keep only the `n` lowest bits.
  ///
  /// ```ignore
  /// assert_eq!(0b0110_1011_i8.mask_lsb(3), 0b011)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Keep only the `n` highest bits.
  ///
  /// ```ignore
  /// assert_eq!(0x1234_i16.mask_msb(8), 0x1200)
  /// ```
  fn mask_msb(self, n: u32) -> Self;

  /// Bit 0.
  fn get_lsb(self) -> bool;

  /// Number of 0s at the top of `self`.
  ///
  /// # Safety
  ///
  /// `self` must not be zero.
  unsafe fn leading_zeros_nonzero(self) -> u32;

  /// The length of the run of equal bits at the top of `self`, minus one. This is how far `self`
  /// must be shifted left to start with `0b01` or `0b10`.
  ///
  /// ```ignore
  /// assert_eq!(0b0000_1100_i8.leading_run_minus_one(), 3);
  /// assert_eq!((-7_i8).leading_run_minus_one(), 4);  // 0b1111_1001
  /// ```
  ///
  /// # Safety
  ///
  /// `self` must not be `0` or `-1`, which are all one run.
  unsafe fn leading_run_minus_one(self) -> u32;

  /// `!self` if `control` is negative, `self` otherwise.
  fn not_if_negative(self, control: Self) -> Self;

  /// `!self` if `control` is non-negative, `self` otherwise.
  fn not_if_positive(self, control: Self) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_abs(self) -> Self;

  /// `(self + other, false)`, or, if that overflows, `((self + other) / 2, true)` with the sum
  /// taken as if there were one more bit.
  fn overflowing_add_shift(self, other: Self) -> (Self, bool);
}

mod int;
mod narrow;
pub use narrow::narrow;

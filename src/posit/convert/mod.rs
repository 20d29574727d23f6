//! Rounding conversions between posits, primitive numbers, and the exact intermediate [`Value`].
//!
//! Every conversion into a posit goes through [`Value`]: the source is first turned into a `Value`
//! (exactly, or with a sticky bit when the source is already inexact), and the `Value` is then
//! rounded once into the target format. Conversions out of a posit go the other way round.
//!
//! [`Value`]: crate::Value

use super::*;

/// Conversion that rounds when the target can't hold the input exactly, in the manner of
/// [`From`] otherwise. Implement this one; [`RoundInto`] comes for free, and every type trivially
/// rounds from itself.
///
/// # Rounding
///
/// Into a posit, rounding is always to the nearest bit pattern, ties to the even one, with two
/// exceptions: nothing rounds to zero except zero, and nothing finite rounds to NaR. So magnitudes
/// above [`MAX`](crate::Posit::MAX) give `MAX`, and nonzero magnitudes below
/// [`MIN_POSITIVE`](crate::Posit::MIN_POSITIVE) give `MIN_POSITIVE`. NaN and the infinities give
/// NaR; every int is a number, its most negative value included. Out of a posit, NaR gives NaN for
/// floats, the most negative value for signed ints, and 0 for unsigned ones.
///
/// ```
/// # use posit_quire::*;
/// assert_eq!(p16::round_from(1.00000001), p16::ONE);
/// assert!(p32::round_from(1.00000001) > p32::ONE);
/// assert_eq!(p8::round_from(1e30), p8::MAX);
/// assert_eq!(p8::round_from(-1e-30), p8::MAX_NEGATIVE);
/// assert_eq!(p32::round_from(i32::MIN), p32::round_from(-2147483648.0));
/// assert_eq!(i32::round_from(p32::NAR), i32::MIN);
/// assert_eq!(f64::round_from(p16::MIN_POSITIVE), 2f64.powi(-56));
/// ```
///
/// See section 4 ("Rounding") and section 6 ("Conversions") of the
/// [posit standard](https://posithub.org/docs/posit_standard-2.pdf).
pub trait RoundFrom<T> {
  /// Convert `value`, rounding if needed (see [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// [`RoundFrom`] seen from the other side, as [`Into`] is to [`From`]; nicer in bounds and when
/// the target type can be inferred.
///
/// ```
/// # use posit_quire::*;
/// let third: p32 = (1.0_f64 / 3.0).round_into();
/// let back: f64 = third.round_into();
/// assert!((back - 1.0 / 3.0).abs() < 1e-9);
/// assert_eq!(p32::NAR, f32::INFINITY.round_into());
/// ```
pub trait RoundInto<T> {
  /// Convert `self`, rounding if needed (see [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

mod float;
mod int;
mod posit;

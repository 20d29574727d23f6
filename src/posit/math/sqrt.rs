use super::*;

use crate::RoundFrom;
use crate::posit::value::{Repr, Value};

/// `√x` for a positive `x`, as a [`Value`] that is exact or flagged as sticky.
///
/// With `x = frac × 2^(exp - 126)`, first make `exp` even by moving one bit from the exponent
/// into `frac` (which fits, since `frac < 2^127` and so `frac << 1 < 2^128` unsigned). Then
///
///   √(frac × 2^(exp - 126)) = √frac × 2^(exp / 2 - 63)
///
/// where the integer square root of `frac` has 64 significant bits, more than any posit keeps.
/// It's rounded down, so a nonzero remainder is exactly what `sticky` means.
fn sqrt_value(frac: i128, exp: i32) -> Value {
  let odd = exp & 1;
  let radicand = (frac as u128) << odd;
  let root = radicand.isqrt();
  let exact = root * root == radicand;
  Value::from_scaled(root as i128, ((exp - odd) >> 1) - 63).with_sticky(!exact)
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The square root of `self`, rounded. NaR if `self` is negative or NaR.
  ///
  /// Standard: "**sqrt**".
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p16::round_from(6.25).sqrt(), p16::round_from(2.5));
  /// assert_eq!(p32::round_from(2).sqrt(), p32::round_from(core::f64::consts::SQRT_2));
  /// assert_eq!(p16::MINUS_ONE.sqrt(), p16::NAR);
  /// ```
  pub fn sqrt(self) -> Self {
    match Value::from(self).0 {
      Repr::Zero => Self::ZERO,
      Repr::Regular { frac, exp, .. } if frac > 0 => Self::round_from(sqrt_value(frac, exp)),
      Repr::Regular { .. } | Repr::NaR => Self::NAR,
    }
  }
}

use super::*;

use crate::RoundFrom;
use crate::posit::value::{Repr, Value};

/// A 256-bit two's complement integer, `high × 2^128 + low`; room enough for the sum of two
/// 128-bit fractions once one is shifted left by up to 127 places.
#[derive(Clone, Copy)]
struct Wide {
  high: i128,
  low: u128,
}

impl Wide {
  /// `x << shift`, for `shift < 128`.
  fn shl(x: i128, shift: u32) -> Self {
    if shift == 0 {
      Self { high: x >> 127, low: x as u128 }
    } else {
      Self { high: x >> (128 - shift), low: (x as u128) << shift }
    }
  }

  fn add(self, other: Self) -> Self {
    let (low, carry) = self.low.overflowing_add(other.low);
    Self { high: self.high.wrapping_add(other.high).wrapping_add(i128::from(carry)), low }
  }

  /// `self × 2^scale`, cut down to its top 128 significant bits; whatever is cut, like `sticky`,
  /// is a positive amount below the last kept bit.
  fn to_value(self, scale: i32, sticky: bool) -> Value {
    let sign = self.high >> 127;
    let low = self.low as i128;
    if self.high == sign && low >> 127 == sign {
      return Value::from_scaled(low, scale).with_sticky(sticky)
    }
    // All but one of the leading copies of the sign bit are redundant.
    let redundant = if self.high == sign { 127 } else { (self.high ^ sign).leading_zeros() - 1 };
    let (frac, dropped) =
      if redundant == 0 {
        (self.high, self.low)
      } else {
        ((self.high << redundant) | (self.low >> (128 - redundant)) as i128, self.low << redundant)
      };
    Value::from_scaled(frac, scale + 128 - redundant as i32).with_sticky(sticky || dropped != 0)
  }
}

/// `x + y` for exact, nonzero `x` and `y`, exact or flagged as sticky.
///
/// The one with the larger exponent is shifted left by up to 127 places, lining it up with the
/// other. If that isn't far enough the other is shifted right instead, rounding towards negative
/// infinity. The bits it loses are then all below the lowest bit of the first, so they don't
/// change the integer part of the sum and end up as `sticky`.
fn sum_exact(x: (i128, i32), y: (i128, i32)) -> Value {
  let ((big, big_exp), (small, small_exp)) = if x.1 >= y.1 {(x, y)} else {(y, x)};
  let gap = (i64::from(big_exp) - i64::from(small_exp)) as u64;
  let lift = gap.min(127) as u32;
  let (small, sticky) = match gap - u64::from(lift) {
    0 => (small, false),
    drop @ 1 ..= 127 => (small >> drop, small & !(-1i128 << drop) != 0),
    _ => (small >> 127, true),
  };
  let sum = Wide::shl(big, lift).add(Wide::shl(small, 0));
  sum.to_value(big_exp - Value::FRAC_WIDTH as i32 - lift as i32, sticky)
}

/// The fused multiply-add `a × b + c`, as a [`Value`] that is exact, or else correct in every bit
/// kept and flagged as inexact (the bits lost are far below what any posit holds). NaR if any of
/// the three is NaR.
///
/// Round it to a posit (or use [`Posit::mul_add`]) for `a × b + c` with a single rounding.
///
/// ```
/// # use posit_quire::*;
/// let a = p16::round_from(3);
/// let exact = fma(a, a, p16::round_from(-9));
/// assert!(exact.is_zero());
/// let inexact = fma(p16::MAX, p16::MAX, p16::MIN_POSITIVE);
/// assert!(!inexact.is_exact() && inexact.scale() == Some(112));
/// ```
pub fn fma<const N: u32, const ES: u32, Int: crate::Int>(
  a: Posit<N, ES, Int>,
  b: Posit<N, ES, Int>,
  c: Posit<N, ES, Int>,
) -> Value {
  let product = crate::quire_mul(a, b);
  let addend = Value::from(c);
  match (product.0, addend.0) {
    (Repr::NaR, _) | (_, Repr::NaR) => Value::NAR,
    (Repr::Zero, _) => addend,
    (_, Repr::Zero) => product,
    (Repr::Regular { frac: pf, exp: pe, .. }, Repr::Regular { frac: cf, exp: ce, .. }) =>
      sum_exact((pf, pe), (cf, ce)),
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// `self × b + c`, rounded once (see [`fma`]).
  ///
  /// ```
  /// # use posit_quire::*;
  /// let a = p8::round_from(1.125);
  /// // a × a = 1.265625 rounds to 1.25 on its own, but not inside `mul_add`.
  /// assert_eq!(a * a - p8::round_from(1.25), p8::ZERO);
  /// assert_eq!(a.mul_add(a, p8::round_from(-1.25)), p8::round_from(0.015625));
  /// ```
  pub fn mul_add(self, b: Self, c: Self) -> Self {
    Self::round_from(fma(self, b, c))
  }
}

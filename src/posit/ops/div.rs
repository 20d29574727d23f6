use super::*;

use crate::posit::value::Value;
use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The quotient of `x` and `y`, as a [`Value`] that is either exact or flagged as sticky.
  ///
  /// With `x = xf × 2^(xe - FRAC_WIDTH)` and likewise for `y`, the quotient is
  ///
  ///   xf ÷ yf × 2^(xe - ye)
  ///   = ((xf << SHIFT) ÷ yf) × 2^(xe - ye - SHIFT)
  ///
  /// and the integer division `(xf << SHIFT) / yf` is done in 128 bits, rounding towards negative
  /// infinity so that any remainder is a positive amount dropped, i.e. the sticky flag. Since
  /// both `frac`s are in `[1, 2[` (or `[-2, -1[`), the quotient has at least `SHIFT` significant
  /// bits, which is always at least one more than a posit of this size can keep.
  fn div_value(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> Value {
    // `|xf| <= 2^(BITS - 1)`, so this is as far as it can go without overflowing an `i128`.
    let shift = 127 - Int::BITS;
    let (xf, yf): (i128, i128) = (x.frac.into(), y.frac.into());
    let (xe, ye): (i128, i128) = (x.exp.into(), y.exp.into());
    let dividend = xf << shift;
    let (mut quot, rem) = (dividend / yf, dividend % yf);
    if rem != 0 && (rem < 0) != (yf < 0) {
      quot -= 1
    }
    let limit = i128::from(i32::MAX / 2);
    let scale = (xe - ye - i128::from(shift)).clamp(-limit, limit);
    Value::from_scaled(quot, scale as i32).with_sticky(rem != 0)
  }

  pub(crate) fn div(self, other: Self) -> Self {
    match (self.try_decode(), other.try_decode()) {
      (Ok(x), Ok(y)) => Self::round_from(Self::div_value(x, y)),
      // x ÷ 0 and anything involving NaR
      (_, Err(_)) => Self::NAR,
      (Err(x), Ok(_)) => x,
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}

#[cfg(test)]
mod tests {
  super::mk_tests!{/, /=}
}

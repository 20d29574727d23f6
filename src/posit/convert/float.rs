use super::*;

use crate::posit::value::{Value, Repr};

/// Exact: every finite float is a [`Value`]. NaN and the infinities have no counterpart among
/// the reals and become NaR.
impl From<f64> for Value {
  fn from(value: f64) -> Self {
    use core::num::FpCategory;
    const MANTISSA_BITS: u32 = f64::MANTISSA_DIGITS - 1;
    const EXP_BIAS: i32 = f64::MAX_EXP - 1;
    let bits = value.to_bits();
    let mantissa = bits & ((1 << MANTISSA_BITS) - 1);
    let exponent = ((bits << 1) >> (MANTISSA_BITS + 1)) as i32;
    // A subnormal is `0.mmmm × 2^(1 - bias)`, a normal is `1.mmmm × 2^(exponent - bias)`.
    let (int, scale) = match value.classify() {
      FpCategory::Nan | FpCategory::Infinite => {
        log::warn!("{value} is not a real number, converting it to NaR");
        return Self::NAR
      },
      FpCategory::Zero => return Self::ZERO,
      FpCategory::Subnormal => (mantissa, 1 - EXP_BIAS - MANTISSA_BITS as i32),
      FpCategory::Normal => (mantissa | 1 << MANTISSA_BITS, exponent - EXP_BIAS - MANTISSA_BITS as i32),
    };
    let int = i128::from(int);
    Self::from_scaled(if value.is_sign_negative() {-int} else {int}, scale)
  }
}

/// Exact, through `f64`.
impl From<f32> for Value {
  fn from(value: f32) -> Self {
    Self::from(f64::from(value))
  }
}

/// Round `value` to the nearest binary float with `M` explicit mantissa bits and `E` exponent
/// bits, ties to even, returning its bit pattern. Overflows go to infinity and underflows to a
/// signed zero, as IEEE 754 prescribes; NaR goes to a quiet NaN.
fn round_to_ieee<const M: u32, const E: u32>(value: Value) -> u64 {
  let exp_bias = (1i64 << (E - 1)) - 1;
  let exp_min = 1 - exp_bias;
  let infinity = ((1u64 << E) - 1) << M;
  let (frac, exp, sticky) = match value.0 {
    Repr::Zero => return 0,
    Repr::NaR => return infinity | 1 << (M - 1),
    Repr::Regular { frac, exp, sticky } => (frac, exp, sticky),
  };

  // Work on the magnitude. The sticky bit of a negative `frac` counts towards 0, so the magnitude
  // is one unit less, with a sticky bit that again counts away from 0.
  let negative = frac < 0;
  let magnitude = if negative && sticky {frac.unsigned_abs() - 1} else {frac.unsigned_abs()};
  let sign_bit = u64::from(negative) << (M + E);

  // Bit `i` of `magnitude` has weight `2^(exp - 126 + i)`. Keep the bits down to weight
  // `2^lsb_scale`: M bits below the leading one for a normal, or down to the fixed weight of the
  // subnormals' last bit.
  let exp = i64::from(exp);
  let scale = exp + (127 - i64::from(magnitude.leading_zeros())) - i64::from(Value::FRAC_WIDTH);
  let lsb_scale = scale.max(exp_min) - i64::from(M);
  let shift = lsb_scale - (exp - i64::from(Value::FRAC_WIDTH));
  let (kept, round, rest) = match shift {
    0 ..= 127 => (
      magnitude >> shift,
      shift > 0 && (magnitude >> (shift - 1)) & 1 == 1,
      shift > 1 && magnitude & ((1 << (shift - 1)) - 1) != 0,
    ),
    128 => (0, magnitude >> 127 == 1, magnitude << 1 != 0),
    _ => (0, false, true),
  };
  let kept = kept as u64;
  let kept = kept + u64::from(round && (sticky || rest || kept & 1 == 1));

  // `kept` carries the hidden bit for a normal, which adds one to the exponent field; so the
  // field is set to one less than the biased exponent. A carry out of the mantissa on rounding
  // moves up to the next exponent (or from the subnormals up to the normals) by itself.
  let exp_field = lsb_scale + i64::from(M) + exp_bias - 1;
  if exp_field >= (1 << E) - 1 {
    return sign_bit | infinity
  }
  let bits = ((exp_field as u64) << M) + kept;
  sign_bit | bits.min(infinity)
}

/// Round to the nearest `f64`, ties to even. [NaR](Value::NAR) becomes NaN.
impl RoundFrom<Value> for f64 {
  fn round_from(value: Value) -> Self {
    f64::from_bits(round_to_ieee::<{f64::MANTISSA_DIGITS - 1}, 11>(value))
  }
}

/// Round to the nearest `f32`, ties to even. [NaR](Value::NAR) becomes NaN.
impl RoundFrom<Value> for f32 {
  fn round_from(value: Value) -> Self {
    f32::from_bits(round_to_ieee::<{f32::MANTISSA_DIGITS - 1}, 8>(value) as u32)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<f32> for Posit<N, ES, Int> {
  /// Convert an `f32` into a `Posit`, [rounding according to the standard]:
  ///
  /// - If the value is any infinity or any NaN, it converts to [NaR](Posit::NAR).
  /// - Otherwise, the float value is rounded (if necessary).
  ///
  /// [rounding according to the standard]: https://posithub.org/docs/posit_standard-2.pdf#subsection.6.5
  fn round_from(value: f32) -> Self {
    Self::round_from(Value::from(value))
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<f64> for Posit<N, ES, Int> {
  /// Convert an `f64` into a `Posit`, [rounding according to the standard]:
  ///
  /// - If the value is any infinity or any NaN, it converts to [NaR](Posit::NAR).
  /// - Otherwise, the float value is rounded (if necessary).
  ///
  /// [rounding according to the standard]: https://posithub.org/docs/posit_standard-2.pdf#subsection.6.5
  fn round_from(value: f64) -> Self {
    Self::round_from(Value::from(value))
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for f32 {
  /// Convert a `Posit` into an `f32`, rounding to nearest, ties to even, if needed. Posits
  /// outside the range of `f32` become infinities or signed zeros; [NaR](Posit::NAR) becomes NaN.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    Self::round_from(Value::from(value))
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Posit<N, ES, Int>> for f64 {
  /// Convert a `Posit` into an `f64`, rounding to nearest, ties to even, if needed. Exact for
  /// every posit of up to 32 bits; [NaR](Posit::NAR) becomes NaN.
  fn round_from(value: Posit<N, ES, Int>) -> Self {
    Self::round_from(Value::from(value))
  }
}

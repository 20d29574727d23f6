//! Exact [`Rational`] values of posits, values and quires, and a check that a posit is the
//! correctly rounded form of a rational. These are the test oracle, so they read the bits in the
//! plainest way possible, sharing no code with the decoder and encoder they check.

use super::*;

use crate::Quire;
use crate::posit::value::{Repr, Value};

use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Reciprocal};

/// The error returned when converting NaR (a posit, value or quire) to a [`Rational`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsNaR;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The value of a posit other than 0 and NaR, read off its bits one at a time: sign, then a run
  /// of equal bits and its terminator (the regime), then up to `ES` exponent bits (missing ones
  /// are 0), then the fraction bits after a hidden 1.
  fn rational_regular(self) -> Rational {
    let bits: i128 = self.to_bits().into();
    assert!(bits != 0 && bits != i128::MIN >> (128 - N), "{bits:b} is 0 or NaR");
    let negative = bits < 0;
    let magnitude = bits.unsigned_abs();
    let mut rest = (0 .. N - 1).rev().map(move |i| magnitude >> i & 1 == 1).peekable();

    let Some(first) = rest.next() else { unreachable!() };
    let mut run = 1i64;
    while rest.next_if_eq(&first).is_some() {
      run += 1
    }
    let _terminator = rest.next();
    let regime = if first { run - 1 } else { -run };

    let mut exponent = 0i64;
    for _ in 0 .. ES {
      exponent = exponent << 1 | i64::from(rest.next().unwrap_or(false))
    }

    let (mut fraction, mut fraction_len) = (0u128, 0i64);
    for bit in rest {
      fraction = fraction << 1 | u128::from(bit);
      fraction_len += 1
    }

    let significand = Rational::from(1) + Rational::from(fraction) / Rational::power_of_2(fraction_len);
    let magnitude = Rational::power_of_2((regime << ES) + exponent) * significand;
    if negative {-magnitude} else {magnitude}
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> TryFrom<Posit<N, ES, Int>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<N, ES, Int>) -> Result<Self, Self::Error> {
    if value == Posit::ZERO {
      Ok(Rational::from(0))
    } else if value == Posit::NAR {
      Err(IsNaR)
    } else {
      Ok(value.rational_regular())
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> From<Decoded<N, ES, Int>> for Rational {
  fn from(value: Decoded<N, ES, Int>) -> Self {
    let frac: i128 = value.frac.into();
    let exp: i128 = value.exp.into();
    let frac_width = Decoded::<N, ES, Int>::FRAC_WIDTH as i128;
    Rational::from(frac) * Rational::power_of_2((exp - frac_width) as i64)
  }
}

/// The bits of a [`Value`] that were kept, **ignoring** the sticky flag.
impl TryFrom<Value> for Rational {
  type Error = IsNaR;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    match value.0 {
      Repr::Zero => Ok(Rational::from(0)),
      Repr::NaR => Err(IsNaR),
      Repr::Regular { frac, exp, .. } =>
        Ok(Rational::from(frac) * Rational::power_of_2(i64::from(exp) - i64::from(Value::FRAC_WIDTH))),
    }
  }
}

/// A quire is a two's complement integer over `2^WIDTH`.
impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> TryFrom<&Quire<N, ES, SIZE>> for Rational {
  type Error = IsNaR;

  fn try_from(value: &Quire<N, ES, SIZE>) -> Result<Self, Self::Error> {
    if value.is_nar() {
      return Err(IsNaR)
    }
    let limbs = value.as_u64_array();
    let mut numerator = Integer::from(0);
    for (i, &limb) in limbs.iter().enumerate() {
      let weight = Integer::power_of_2(64 * i as u64);
      let limb = if i == limbs.len() - 1 { Integer::from(limb as i64) } else { Integer::from(limb) };
      numerator += limb * weight
    }
    let denominator = Integer::power_of_2(u64::from(Quire::<N, ES, SIZE>::WIDTH));
    Ok(Rational::from_integers(numerator, denominator))
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> TryFrom<Quire<N, ES, SIZE>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Quire<N, ES, SIZE>) -> Result<Self, Self::Error> {
    Rational::try_from(&value)
  }
}

/// Whether `posit` is `exact` rounded the way posits round:
///
///   - Nonzero numbers never round to 0 or NaR; beyond [`Posit::MAX`] (or between 0 and
///     [`Posit::MIN_POSITIVE`]) they stick to the extreme posit, and likewise for negatives.
///   - Near the edges of the range, where exponent bits are cut off, to the nearest posit by
///     **ratio**; elsewhere, to the nearest posit by **difference**. Ties go to the even bit
///     pattern.
pub fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Rational,
  posit: Posit<N, ES, Int>,
) -> bool {
  let rational = |p: Posit<N, ES, Int>| Rational::try_from(p).ok();
  let zero = Rational::from(0);
  if posit == Posit::ZERO {
    return exact == zero
  } else if posit == Posit::NAR {
    return false
  }

  // Saturation, at both ends of both signs.
  let saturated = [
    (Posit::<N, ES, Int>::MAX, exact >= rational(Posit::MAX).unwrap()),
    (Posit::<N, ES, Int>::MIN_POSITIVE, exact > zero && exact <= rational(Posit::MIN_POSITIVE).unwrap()),
    (Posit::<N, ES, Int>::MAX_NEGATIVE, exact < zero && exact >= rational(Posit::MAX_NEGATIVE).unwrap()),
    (Posit::<N, ES, Int>::MIN, exact <= rational(Posit::MIN).unwrap()),
  ];
  if let Some(&(expected, _)) = saturated.iter().find(|(_, applies)| *applies) {
    return posit == expected
  }

  // Exponent bits start being cut off once the regime is longer than `N - 2 - ES` bits, i.e.
  // beyond `2^((N - 2 - ES) << ES)` and below its reciprocal.
  let cutoff = Rational::power_of_2((N.saturating_sub(2 + ES) as i64) << ES);
  let geometric = !((&cutoff).reciprocal() ..= cutoff).contains(&(&exact).abs());
  let distance = |far: &Rational, near: &Rational| -> Rational {
    if !geometric {
      (far - near).abs()
    } else if far.abs() >= near.abs() {
      far / near
    } else {
      near / far
    }
  };

  let Some(curr) = rational(posit) else { return false };
  let is_even = posit.to_bits() & Int::ONE == Int::ZERO;
  // The neighbour on the side of `exact`, which must not be strictly closer.
  let neighbour = if exact < curr { rational(posit.prior()) } else { rational(posit.next()) };
  match neighbour {
    _ if exact == curr => true,
    Some(other) if (exact < curr && other < exact) || (curr < exact && exact < other) => {
      let (to_curr, to_other) = (distance(&exact, &curr), distance(&other, &exact));
      to_curr < to_other || (to_curr == to_other && is_even)
    },
    _ => false,
  }
}

/// As [`is_correct_rounded`], where an `exact` NaR must give a NaR `posit`.
pub fn try_is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Int>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit == Posit::NAR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Every positive 6-bit posit with 2 exponent bits, as `2^scale × (1 + fraction)`, and its
  /// negation (cf. Posit Arithmetic, John L. Gustafson, Chapter 2).
  #[test]
  fn posit_6_2() {
    type P = Posit<6, 2, i16>;
    assert_eq!(Rational::try_from(P::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(P::NAR), Err(IsNaR));

    // `(scale, fraction is 0b1)`
    let scales = [
      (-16, false), (-12, false), (-10, false), (-8, false), (-7, false), (-6, false), (-5, false),
      (-4, false), (-4, true), (-3, false), (-3, true), (-2, false), (-2, true), (-1, false),
      (-1, true), (0, false), (0, true), (1, false), (1, true), (2, false), (2, true), (3, false),
      (3, true), (4, false), (5, false), (6, false), (7, false), (8, false), (10, false),
      (12, false), (16, false),
    ];
    for (bits, (scale, half)) in (1 ..).zip(scales) {
      let significand = if half {Rational::from_signeds(3, 2)} else {Rational::from(1)};
      let value = Rational::power_of_2(scale as i64) * significand;
      assert_eq!(Rational::try_from(P::from_bits(bits)), Ok(value.clone()), "{bits:06b}");
      assert_eq!(Rational::try_from(P::from_bits(-bits)), Ok(-value), "-{bits:06b}");
    }
  }

  #[test]
  #[allow(overflowing_literals)]
  fn examples() {
    let p6 = |bits| Rational::try_from(Posit::<6, 1, i8>::from_bits(bits));
    assert_eq!(p6(0b100001), Ok(Rational::from(-256)));
    assert_eq!(p6(0b000001), Ok(Rational::from_signeds(1, 256)));
    assert_eq!(p6(0b001101), Ok(Rational::from_signeds(5, 8)));
    assert_eq!(p6(0b110010), Ok(Rational::from_signeds(-3, 4)));

    let p16 = |bits| Rational::try_from(Posit::<16, 2, i16>::from_bits(bits));
    assert_eq!(p16(0b0_01_00_10000001000), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(p16(0b0_01_11_11011001000), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(p16(0b0_11110_10_11001000), Ok(Rational::from(456 << 6)));
    assert_eq!(p16(0b1_00001_01_00111000), Ok(Rational::from(-456 << 6)));
    assert_eq!(p16(0b1_001_01_0100111000), Ok(Rational::from_signeds(-1736, 1 << 4)));
    assert_eq!(p16(0b1_1110_10_100111000), Ok(Rational::from_signeds(-712, 1 << 20)));
    // Partial or missing exponent
    assert_eq!(p16(0b1_11111111111110_1_), Ok(Rational::from_signeds(-1, 1i64 << 50)));
    assert_eq!(p16(0b1_11111111111110_0_), Ok(Rational::from_signeds(-1, 1i64 << 48)));
    assert_eq!(p16(0b0_11111111110_00_10), Ok(Rational::from(3i64 << 35)));
    assert_eq!(p16(0b0111_1111_1111_1111), Ok(Rational::from(1i64 << 56)));
  }

  #[test]
  fn value() {
    assert_eq!(Rational::try_from(Value::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Value::NAR), Err(IsNaR));
    assert_eq!(Rational::try_from(Value::from_scaled(3, -2)), Ok(Rational::from_signeds(3, 4)));
    assert_eq!(Rational::try_from(Value::from_scaled(-5, 10)), Ok(Rational::from(-5 << 10)));
  }

  #[test]
  fn quire() {
    // In a q8, 1.0 is bit 48, i.e. the lowest bit of byte 6.
    let mut bytes = [0u8; 16];
    bytes[6] = 123;
    assert_eq!(Rational::try_from(crate::q8::from_le_bytes(bytes)), Ok(Rational::from(123)));
    bytes[7] = 234;
    assert_eq!(Rational::try_from(crate::q8::from_le_bytes(bytes)), Ok(Rational::from(123 + (234 << 8))));
    let mut bytes = [0u8; 16];
    bytes[4] = 123;
    assert_eq!(Rational::try_from(crate::q8::from_le_bytes(bytes)), Ok(Rational::from_signeds(123, 1 << 16)));
    bytes[12] = 0x10;
    assert_eq!(
      Rational::try_from(crate::q8::from_le_bytes(bytes)),
      Ok(Rational::from_signeds(123, 1 << 16) + Rational::power_of_2(52i64)),
    );

    // Negative: all ones above some bit.
    let mut bytes = [0xff; 16];
    bytes[.. 6].fill(0);
    assert_eq!(Rational::try_from(crate::q8::from_le_bytes(bytes)), Ok(Rational::from(-1)));
    bytes[5] = 0xff;
    bytes[4] = 0xf0;
    assert_eq!(Rational::try_from(crate::q8::from_le_bytes(bytes)), Ok(Rational::from_signeds(-1, 1 << 12)));

    assert_eq!(Rational::try_from(crate::q32::NAR), Err(IsNaR))
  }

  #[test]
  fn rounding_check() {
    use crate::p8;
    let one = Rational::from(1);
    assert!(is_correct_rounded(one.clone(), p8::ONE));
    assert!(!is_correct_rounded(one.clone(), p8::ONE.next()));
    // Exactly halfway between 1 and the next p8 (fraction bits 000 and 001) goes to the even one.
    let half_ulp = Rational::from_signeds(1, 16);
    assert!(is_correct_rounded(&one + &half_ulp, p8::ONE));
    assert!(!is_correct_rounded(&one + &half_ulp, p8::ONE.next()));
    assert!(is_correct_rounded(Rational::power_of_2(100i64), p8::MAX));
    assert!(is_correct_rounded(-Rational::power_of_2(-100i64), p8::MAX_NEGATIVE));
    assert!(!is_correct_rounded(Rational::from(0), p8::MIN_POSITIVE));
    assert!(try_is_correct_rounded(Err(IsNaR), p8::NAR));
  }
}

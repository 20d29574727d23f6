//! A field-by-field view of a posit's bit pattern.
//!
//! The fast paths in [`decode`](super::decode) and [`encode`](super::encode) never materialise the
//! individual fields; the functions here do, one at a time, for callers that want to inspect or
//! build a posit bit by bit. All of them look at the two's complement *absolute value* of the bit
//! pattern: the regime, exponent, and fraction of `-x` are those of `x`.

use super::*;
use crate::Error;
use core::fmt;

/// The fields of a posit, as returned by [`Posit::fields`].
///
/// Bit strings are right aligned in a `u64`, and each comes with its length in bits, which may be
/// zero. For [zero](Posit::ZERO) and [NaR](Posit::NAR), every field is empty and `regime` is `0`;
/// the two are told apart by `sign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
  /// The sign bit.
  pub sign: bool,
  /// The regime value `k`.
  pub regime: i32,
  /// Number of bits taken by the regime, including the terminating bit if there is one.
  pub regime_len: u32,
  /// The exponent, left aligned in an `ES`-bit field: if only some of its bits fit in the posit,
  /// the missing low bits read as 0.
  pub exponent: u64,
  /// Number of exponent bits actually present in the posit, at most `ES`.
  pub exponent_len: u32,
  /// The fraction bits, without the hidden bit.
  pub fraction: u64,
  /// Number of fraction bits.
  pub fraction_len: u32,
}

impl Fields {
  /// The binary scale encoded by the regime and exponent, i.e. `k × 2^ES + exponent`. The value
  /// of a posit is `±(1 + fraction / 2^fraction_len) × 2^scale`.
  pub const fn scale(&self, es: u32) -> i64 {
    ((self.regime as i64) << es) + self.exponent as i64
  }
}

const fn mask(n: u32) -> u64 {
  if n >= u64::BITS { u64::MAX } else { (1 << n) - 1 }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Absolute value of the bit pattern, as an unsigned number of at most `N - 1` bits. Not
  /// meaningful for NaR.
  fn magnitude(self) -> u64 {
    let bits: i128 = self.0.into();
    bits.unsigned_abs() as u64
  }

  /// Number of bits available to the regime, exponent, and fraction, i.e. all but the sign.
  const BODY_BITS: u32 = Self::BITS - 1;

  /// Returns the regime value `k` and the number of bits the regime takes, counting the
  /// terminating bit if present.
  ///
  /// A run of `m` ones is `k = m - 1`, a run of `m` zeros is `k = -m`. Zero and NaR have no
  /// regime, and return `(0, 0)`.
  ///
  /// ```
  /// # use posit_quire::p8;
  /// assert_eq!(p8::ONE.decode_regime(), (0, 2));        // 0b0_10_00000
  /// assert_eq!(p8::MAX.decode_regime(), (6, 7));        // 0b0_1111111
  /// assert_eq!(p8::MIN_POSITIVE.decode_regime(), (-6, 7));  // 0b0_0000001
  /// ```
  pub fn decode_regime(self) -> (i32, u32) {
    if self == Self::ZERO || self == Self::NAR {
      return (0, 0)
    }
    // Move the body to the top of the word; the bits shifted in below it are zeros.
    let body = self.magnitude() << (u64::BITS - Self::BODY_BITS);
    let ones = body >> (u64::BITS - 1) != 0;
    let run = if ones { (!body).leading_zeros() } else { body.leading_zeros() };
    let run = run.min(Self::BODY_BITS);
    let k = if ones { run as i32 - 1 } else { -(run as i32) };
    (k, (run + 1).min(Self::BODY_BITS))
  }

  /// The shortest regime bit pattern that decodes to `k`, right aligned, and its length.
  ///
  /// The length is capped at `N - 1`. A `k` too large (or too small) to be represented saturates
  /// to the regime of [`MAX`](Self::MAX) (or [`MIN_POSITIVE`](Self::MIN_POSITIVE)), which fills
  /// the whole posit.
  ///
  /// ```
  /// # use posit_quire::p8;
  /// assert_eq!(p8::assign_regime_pattern(0), (0b10, 2));
  /// assert_eq!(p8::assign_regime_pattern(-2), (0b001, 3));
  /// assert_eq!(p8::assign_regime_pattern(100), (0b1111111, 7));
  /// assert_eq!(p8::assign_regime_pattern(-100), (0b0000001, 7));
  /// ```
  pub fn assign_regime_pattern(k: i32) -> (u64, u32) {
    let max = Self::BODY_BITS;
    if k >= 0 {
      let run = k as u32 + 1;
      if run >= max {
        (mask(max), max)
      } else {
        (mask(run) << 1, run + 1)
      }
    } else {
      let run = k.unsigned_abs();
      if run + 1 >= max {
        (1, max)
      } else {
        (1, run + 1)
      }
    }
  }

  /// The exponent field and the number of its bits present in `self`.
  ///
  /// The exponent is returned left aligned in `ES` bits: if the regime leaves room for fewer than
  /// `ES` bits, those are the high bits and the rest read as 0.
  pub fn decode_exponent(self) -> (u64, u32) {
    let (_, regime_len) = self.decode_regime();
    if regime_len == 0 {
      return (0, 0)
    }
    let rest = Self::BODY_BITS - regime_len;
    let len = rest.min(ES);
    let exponent = (self.magnitude() >> (rest - len)) & mask(len);
    (exponent << (ES - len), len)
  }

  /// The fraction bits (without the hidden bit) and their number.
  pub fn decode_fraction(self) -> (u64, u32) {
    let (_, regime_len) = self.decode_regime();
    if regime_len == 0 {
      return (0, 0)
    }
    let len = (Self::BODY_BITS - regime_len).saturating_sub(ES);
    (self.magnitude() & mask(len), len)
  }

  /// All the fields of `self` at once.
  ///
  /// ```
  /// # use posit_quire::{p8, Fields, RoundFrom};
  /// let f = p8::round_from(-0.625).fields();
  /// assert_eq!(f, Fields {
  ///   sign: true,
  ///   regime: -1, regime_len: 2,
  ///   exponent: 0b11, exponent_len: 2,
  ///   fraction: 0b010, fraction_len: 3,
  /// });
  /// assert_eq!(f.scale(2), -1);
  /// ```
  pub fn fields(self) -> Fields {
    let (regime, regime_len) = self.decode_regime();
    let (exponent, exponent_len) = self.decode_exponent();
    let (fraction, fraction_len) = self.decode_fraction();
    Fields {
      sign: self.0 < Int::ZERO,
      regime,
      regime_len,
      exponent,
      exponent_len,
      fraction,
      fraction_len,
    }
  }

  /// Puts a posit together from its fields, without rounding.
  ///
  /// `exponent` is an `ES`-bit field; `fraction` holds `fraction_len` bits, without the hidden
  /// bit. Low bits of the exponent and trailing fraction bits that do not fit may be dropped only
  /// if they are zero. The result is never zero or NaR.
  ///
  /// # Errors
  ///
  ///   - [`Error::RbitsTooLarge`] if the regime for `k` needs more than `N - 1` bits.
  ///   - [`Error::HposTooLarge`] if the exponent and fraction do not fit in the bits the regime
  ///     leaves (the position of the last significant bit is past the end of the posit).
  ///
  /// ```
  /// # use posit_quire::{p8, Error, RoundFrom};
  /// assert_eq!(p8::from_fields(false, 0, 0b01, 0b1, 1), Ok(p8::round_from(3)));
  /// assert_eq!(p8::from_fields(true, 0, 0, 0, 0), Ok(p8::MINUS_ONE));
  /// assert_eq!(p8::from_fields(false, 7, 0, 0, 0), Err(Error::RbitsTooLarge { rbits: 8, max: 7 }));
  /// assert_eq!(p8::from_fields(false, 0, 0, 0b1111, 4), Err(Error::HposTooLarge { hpos: 9, max: 8 }));
  /// ```
  pub fn from_fields(
    sign: bool,
    k: i32,
    exponent: u64,
    fraction: u64,
    fraction_len: u32,
  ) -> Result<Self, Error> {
    let max = Self::BODY_BITS;
    let (regime, regime_len) = if k >= 0 {
      let run = k as u32 + 1;
      if run > max {
        return Err(Error::RbitsTooLarge { rbits: run, max })
      }
      if run == max { (mask(max), max) } else { (mask(run) << 1, run + 1) }
    } else {
      let run = k.unsigned_abs();
      if run + 1 > max {
        return Err(Error::RbitsTooLarge { rbits: run + 1, max })
      }
      (1, run + 1)
    };
    let rest = max - regime_len;

    // Significant bits of the exponent and the fraction, ignoring trailing zeros.
    let fraction = fraction & mask(fraction_len);
    let (fraction, fraction_len) = if fraction == 0 {
      (0, 0)
    } else {
      let tz = fraction.trailing_zeros();
      (fraction >> tz, fraction_len - tz)
    };
    let exponent_len = if fraction_len != 0 {
      ES
    } else if exponent == 0 {
      0
    } else {
      ES - exponent.trailing_zeros().min(ES)
    };
    // An exponent wider than `ES` bits never fits.
    let exponent_len = if exponent & !mask(ES) != 0 { Self::BITS } else { exponent_len };
    let used = regime_len + exponent_len + fraction_len;
    if used > max {
      return Err(Error::HposTooLarge { hpos: used + 1, max: Self::BITS })
    }

    let exponent = if rest >= ES { exponent << (rest - ES) } else { exponent >> (ES - rest) };
    let fraction = if fraction_len == 0 { 0 } else { fraction << (rest - ES - fraction_len) };
    let magnitude = (regime << rest | exponent | fraction) as i128;
    let bits = if sign { -magnitude } else { magnitude };
    Ok(Self::from_bits(Int::of_i128(bits)))
  }

  /// A [`Display`](fmt::Display) adapter that prints the bits of `self` grouped by field, as
  /// `0b` sign `.` regime `.` exponent `.` fraction. Like [`Self::fields`], the regime, exponent,
  /// and fraction shown are those of the absolute value. Empty fields print nothing.
  ///
  /// ```
  /// # use posit_quire::{p8, Posit, RoundFrom};
  /// assert_eq!(p8::round_from(2).to_binary().to_string(), "0b0.10.01.000");
  /// assert_eq!(p8::round_from(-2).to_binary().to_string(), "0b1.10.01.000");
  /// assert_eq!(p8::MAX.to_binary().to_string(), "0b0.1111111..");
  /// assert_eq!(Posit::<5, 3, i8>::ONE.to_binary().to_string(), "0b0.10.00.");
  /// ```
  pub fn to_binary(self) -> Binary<N, ES, Int> {
    Binary(self)
  }
}

/// Returned by [`Posit::to_binary`].
#[derive(Clone, Copy)]
pub struct Binary<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Posit<N, ES, Int>);

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> fmt::Display for Binary<N, ES, Int> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let fields = self.0.fields();
    let regime_bits = Posit::<N, ES, Int>::assign_regime_pattern(fields.regime).0;
    let exponent_bits = fields.exponent >> (ES - fields.exponent_len);
    f.write_str(if fields.sign { "0b1." } else { "0b0." })?;
    if fields.regime_len != 0 {
      write!(f, "{regime_bits:0w$b}", w = fields.regime_len as usize)?;
    }
    f.write_str(".")?;
    if fields.exponent_len != 0 {
      write!(f, "{exponent_bits:0w$b}", w = fields.exponent_len as usize)?;
    }
    f.write_str(".")?;
    if fields.fraction_len != 0 {
      write!(f, "{:0w$b}", fields.fraction, w = fields.fraction_len as usize)?;
    }
    Ok(())
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> fmt::Debug for Binary<N, ES, Int> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::RoundFrom;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::PowerOf2;
  use proptest::prelude::*;

  /// The value described by `fields`, computed independently of the posit decoder.
  fn value_of(fields: Fields, es: u32) -> Rational {
    let fraction = Rational::from(fields.fraction) / Rational::power_of_2(fields.fraction_len as i64);
    let magnitude = (Rational::from(1) + fraction) * Rational::power_of_2(fields.scale(es));
    if fields.sign { -magnitude } else { magnitude }
  }

  fn roundtrip<const N: u32, const ES: u32, Int: crate::Int>(p: Posit<N, ES, Int>) {
    let f = p.fields();
    if p == Posit::ZERO || p == Posit::NAR {
      assert_eq!((f.regime, f.regime_len, f.exponent_len, f.fraction_len), (0, 0, 0, 0));
      assert_eq!(f.sign, p == Posit::NAR);
      return
    }
    assert_eq!(f.regime_len + f.exponent_len + f.fraction_len, N - 1, "{p:?}");
    assert_eq!(Posit::<N, ES, Int>::from_fields(f.sign, f.regime, f.exponent, f.fraction, f.fraction_len), Ok(p), "{p:?}");
    assert_eq!(Rational::try_from(p), Ok(value_of(f, ES)), "{p:?}");
    let (pattern, len) = Posit::<N, ES, Int>::assign_regime_pattern(f.regime);
    assert_eq!(len, f.regime_len, "{p:?}");
    assert_eq!(pattern, p.magnitude() >> (N - 1 - len), "{p:?}");
  }

  #[test]
  fn posit_10_0_exhaustive() {
    for p in Posit::<10, 0, i16>::cases_exhaustive_all() { roundtrip(p) }
  }

  #[test]
  fn posit_10_1_exhaustive() {
    for p in Posit::<10, 1, i16>::cases_exhaustive_all() { roundtrip(p) }
  }

  #[test]
  fn posit_10_3_exhaustive() {
    for p in Posit::<10, 3, i16>::cases_exhaustive_all() { roundtrip(p) }
  }

  #[test]
  fn posit_5_3_exhaustive() {
    for p in Posit::<5, 3, i8>::cases_exhaustive_all() { roundtrip(p) }
  }

  #[test]
  fn posit_3_0_exhaustive() {
    for p in Posit::<3, 0, i8>::cases_exhaustive_all() { roundtrip(p) }
  }

  #[test]
  fn p8_exhaustive() {
    for p in crate::p8::cases_exhaustive_all() { roundtrip(p) }
  }

  #[test]
  fn p16_exhaustive() {
    for p in crate::p16::cases_exhaustive_all() { roundtrip(p) }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn p32_proptest(p in crate::p32::cases_proptest_all()) { roundtrip(p) }

    #[test]
    fn p64_proptest(p in crate::p64::cases_proptest_all()) { roundtrip(p) }

    #[test]
    fn posit_20_4_proptest(p in Posit::<20, 4, i32>::cases_proptest_all()) { roundtrip(p) }
  }

  #[test]
  fn extremes() {
    type P = crate::p16;
    assert_eq!(P::MAX.fields(), Fields {
      sign: false, regime: 14, regime_len: 15,
      exponent: 0, exponent_len: 0, fraction: 0, fraction_len: 0,
    });
    assert_eq!(P::MIN_POSITIVE.fields(), Fields {
      sign: false, regime: -14, regime_len: 15,
      exponent: 0, exponent_len: 0, fraction: 0, fraction_len: 0,
    });
    assert_eq!(P::MIN.fields().regime, 14);
    assert_eq!(P::MAX_NEGATIVE.fields().regime, -14);
    assert_eq!(P::from_fields(false, 14, 0, 0, 0), Ok(P::MAX));
    assert_eq!(P::from_fields(false, -14, 0, 0, 0), Ok(P::MIN_POSITIVE));
    assert_eq!(P::from_fields(true, 14, 0, 0, 0), Ok(P::MIN));
    assert_eq!(P::from_fields(true, -14, 0, 0, 0), Ok(P::MAX_NEGATIVE));
    assert_eq!(P::assign_regime_pattern(14), (0x7fff, 15));
    assert_eq!(P::assign_regime_pattern(-14), (1, 15));
    assert_eq!(P::assign_regime_pattern(i32::MAX), (0x7fff, 15));
    assert_eq!(P::assign_regime_pattern(i32::MIN), (1, 15));
  }

  #[test]
  fn truncated_exponent() {
    // 13 ones and the terminating 0 leave room for a single exponent bit.
    type P = crate::p16;
    let p = P::from_bits(0b0_11111111111110_1);
    assert_eq!(p.decode_regime(), (12, 14));
    assert_eq!(p.decode_exponent(), (0b10, 1));
    assert_eq!(p.decode_fraction(), (0, 0));
    assert_eq!(p.fields().scale(2), 50);
    assert_eq!(P::from_fields(false, 12, 0b10, 0, 0), Ok(p));
    assert_eq!(P::from_fields(false, 12, 0b11, 0, 0), Err(Error::HposTooLarge { hpos: 17, max: 16 }));
  }

  #[test]
  fn no_fraction_bits() {
    // ES + 2 >= N: there is never room for a fraction.
    type P = Posit<5, 3, i8>;
    for p in P::cases_exhaustive() {
      assert_eq!(p.decode_fraction(), (0, 0));
    }
    type Q = Posit<4, 2, i8>;
    for p in Q::cases_exhaustive() {
      assert_eq!(p.decode_fraction(), (0, 0));
    }
  }

  #[test]
  fn errors() {
    type P = crate::p8;
    assert_eq!(P::from_fields(false, 6, 0, 0, 0), Ok(P::MAX));
    assert_eq!(P::from_fields(false, 7, 0, 0, 0), Err(Error::RbitsTooLarge { rbits: 8, max: 7 }));
    assert_eq!(P::from_fields(false, -6, 0, 0, 0), Ok(P::MIN_POSITIVE));
    assert_eq!(P::from_fields(false, -7, 0, 0, 0), Err(Error::RbitsTooLarge { rbits: 8, max: 7 }));
    assert_eq!(P::from_fields(false, i32::MAX, 0, 0, 0), Err(Error::RbitsTooLarge { rbits: 1 << 31, max: 7 }));
    assert_eq!(P::from_fields(false, 0, 0b100, 0, 0), Err(Error::HposTooLarge { hpos: 11, max: 8 }));
    assert_eq!(P::from_fields(false, 4, 0b01, 0, 0), Err(Error::HposTooLarge { hpos: 9, max: 8 }));
    assert_eq!(P::from_fields(false, 4, 0b10, 0, 0), Ok(P::from_bits(0b0_111110_1)));
    // Trailing zeros in the fraction may be dropped.
    assert_eq!(P::from_fields(false, 0, 0, 0b1000, 4), Ok(P::round_from(1.5)));
  }

  #[test]
  fn binary() {
    assert_eq!(crate::p8::round_from(2).to_binary().to_string(), "0b0.10.01.000");
    assert_eq!(crate::p8::round_from(1.75).to_binary().to_string(), "0b0.10.00.110");
    assert_eq!(crate::p8::round_from(-0.625).to_binary().to_string(), "0b1.01.11.010");
    assert_eq!(crate::p8::MIN_POSITIVE.to_binary().to_string(), "0b0.0000001..");
    assert_eq!(crate::p8::ZERO.to_binary().to_string(), "0b0...");
    assert_eq!(crate::p8::NAR.to_binary().to_string(), "0b1...");
    assert_eq!(crate::p16::ONE.to_binary().to_string(), "0b0.10.00.00000000000");
    assert_eq!(format!("{:?}", Posit::<6, 1, i8>::ONE.to_binary()), "0b0.10.0.00");
  }
}

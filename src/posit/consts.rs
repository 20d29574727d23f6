use super::*;
use crate::underlying::narrow;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The bits of NaR, `0b1000…0`, sign-extended from `N` bits to 64. Every other special bit
  /// pattern is a simple function of this one.
  const NAR_BITS: i64 = i64::MIN >> (64 - Self::BITS);

  /// The posit whose bits are `bits` (sign-extended from `N` bits), in a `const` context.
  const fn of_i64(bits: i64) -> Self {
    Self(narrow::<Int>(bits))
  }

  /// The largest power of two in the posit's range is `2^(useed^(N-2))`, i.e. a regime of `N - 2`
  /// (`0b0111…1`) with every exponent bit cut off.
  const fn max_exp() -> i64 {
    (N as i64 - 2) << ES
  }

  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(Int::ZERO);

  /// Not-a-real (`NaR`), bit pattern `0b1000…0`.
  ///
  /// Standard: "**NaR**".
  pub const NAR: Self = Self::of_i64(Self::NAR_BITS);

  /// Largest representable value, equal to `-MIN`.
  ///
  /// Standard: "**maxPos**".
  pub const MAX: Self = Self::of_i64(!Self::NAR_BITS);

  /// Smallest representable value, equal to `-MAX`; not to be confused with the smallest
  /// absolute value, [`Self::MIN_POSITIVE`].
  pub const MIN: Self = Self::of_i64(Self::NAR_BITS + 1);

  /// Smallest *positive* value, equal to `-MAX_NEGATIVE`.
  ///
  /// Standard: "**minPos**".
  pub const MIN_POSITIVE: Self = Self(Int::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`, bit pattern `0b1111…1`.
  pub const MAX_NEGATIVE: Self = Self::of_i64(-1);

  /// The minimum exponent; [`Self::MIN_POSITIVE`] = 2 <sup>[`Self::MIN_EXP`]</sup>.
  pub const MIN_EXP: Int = narrow::<Int>(-Self::max_exp());

  /// The maximum exponent; [`Self::MAX`] = 2 <sup>[`Self::MAX_EXP`]</sup>.
  pub const MAX_EXP: Int = narrow::<Int>(Self::max_exp());

  /// One (`1`), the multiplicative identity element, bit pattern `0b0100…0`.
  pub const ONE: Self = Self::of_i64(-(Self::NAR_BITS >> 1));

  /// Negative one (`-1`), bit pattern `0b1100…0`.
  pub const MINUS_ONE: Self = Self::of_i64(Self::NAR_BITS >> 1);
}

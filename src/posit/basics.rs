use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The number of bits in the posit (i.e. parameter `N`), which may be fewer than in its `Int`.
  pub const BITS: u32 = {
    assert!(N >= 3, "A posit has at least 3 bits");
    assert!(N <= Int::BITS, "An N-bit posit needs an Int with at least N bits");
    N
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  pub const ES: u32 = {
    assert!(ES <= N, "A posit cannot have more exponent bits ES than bits N");
    // Products of up to three posits, `2^(3 × MAX_EXP)`, must keep an exponent that fits in an
    // `Int` with room to spare, and products of two must fit the `i32` scale of a `Value`:
    // `4 × (N - 2) × 2^ES < 2^min(BITS, 30)`. Rounding `N - 2` down to a power of two gives a
    // check that can be done in a `const`.
    let limit = if Int::BITS < 30 {Int::BITS} else {30};
    assert!(
      (N - 2).ilog2() + ES + 2 < limit,
      "ES is too big for this N and Int; use fewer exponent bits or a wider Int",
    );
    ES
  };

  /// The number of bits of `Int` above the posit's `N`. They always hold copies of bit `N - 1`
  /// (see [`Self::sign_extend`]), so that the `Int` is the posit's bits as a signed integer.
  pub(crate) const JUNK_BITS: u32 = Int::BITS - Self::BITS;

  /// Copy bit `N - 1` of `x` into all the bits above it.
  #[inline]
  pub(crate) fn sign_extend(x: Int) -> Int {
    if const { Self::JUNK_BITS == 0 } {
      x
    } else {
      (x << Self::JUNK_BITS) >> Self::JUNK_BITS
    }
  }

  /// The posit with bit pattern `bits`; anything above the lowest `N` bits is ignored.
  ///
  /// ```
  /// # use posit_quire::Posit;
  /// type P10 = Posit<10, 1, i16>;
  /// assert_eq!(P10::from_bits(0b0000_0001_0000_0000), P10::ONE);
  /// assert_eq!(P10::from_bits(0b0101_1101_0000_0000), P10::ONE);
  /// ```
  #[inline]
  pub fn from_bits(bits: Int) -> Self {
    Self(Self::sign_extend(bits))
  }

  /// As [`Self::from_bits`], without clearing the bits above the lowest `N`.
  ///
  /// # Safety
  ///
  /// The bits above the lowest `N` must all be equal to bit `N - 1`, as they are in the result
  /// of [`Self::to_bits`], or calling this function is *undefined behaviour*. This always holds
  /// if `N == Int::BITS`.
  #[inline]
  pub const unsafe fn from_bits_unchecked(bits: Int) -> Self {
    Self(bits)
  }

  /// The bit pattern of `self`, sign-extended from `N` bits to `Int::BITS`.
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }

  /// Checks whether `self` is [NaR](Self::NAR).
  ///
  /// Standard: "**isNaR**".
  #[inline]
  pub fn is_nar(self) -> bool {
    self == Self::NAR
  }

  /// Checks whether `self` is [zero](Self::ZERO).
  #[inline]
  pub fn is_zero(self) -> bool {
    self == Self::ZERO
  }

  /// Checks whether `self` is strictly less than zero. [NaR](Self::NAR) is not negative.
  #[inline]
  pub fn is_negative(self) -> bool {
    !self.0.is_positive() && self != Self::NAR
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// Number of bits after the binary point in [`Decoded::frac`].
  pub(crate) const FRAC_WIDTH: u32 = Int::BITS - 2;

  pub(crate) const BITS: u32 = Posit::<N, ES, Int>::BITS;
  pub(crate) const ES: u32 = Posit::<N, ES, Int>::ES;
  pub(crate) const JUNK_BITS: u32 = Posit::<N, ES, Int>::JUNK_BITS;

  /// Whether `frac` starts with `0b01` or `0b10`, and (when there are no exponent bits to absorb
  /// it) `exp` is small enough that its top two bits are equal.
  pub(crate) fn is_normalised(self) -> bool {
    let frac = self.frac >> Self::FRAC_WIDTH;
    let exp = self.exp >> Self::FRAC_WIDTH;
    (frac == Int::ONE || frac == !Int::ONE) && (ES > 0 || exp == Int::ZERO || exp == !Int::ZERO)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parameters() {
    assert_eq!((crate::p8::BITS, crate::p8::ES), (8, 2));
    assert_eq!((crate::p64::BITS, crate::p64::ES), (64, 2));
    assert_eq!((Posit::<16, 1, i16>::BITS, Posit::<16, 1, i16>::ES), (16, 1));
    assert_eq!((Posit::<6, 1, i8>::BITS, Posit::<6, 1, i8>::ES), (6, 1));
    assert_eq!((Posit::<10, 2, i64>::BITS, Posit::<10, 2, i64>::JUNK_BITS), (10, 54));
    assert_eq!(Posit::<32, 2, i64>::JUNK_BITS, 32);
  }

  #[test]
  fn es_max() {
    assert_eq!(Posit::<8, 3, i8>::ES, 3);
    assert_eq!(Posit::<16, 10, i16>::ES, 10);
    assert_eq!(Posit::<32, 23, i32>::ES, 23);
    assert_eq!(Posit::<64, 22, i64>::ES, 22);
    assert_eq!(Posit::<20, 20, i64>::ES, 20);
    assert_eq!(Posit::<16, 16, i32>::ES, 16);
  }

  #[test]
  #[allow(overflowing_literals)]
  fn from_bits() {
    type Full = Posit<16, 2, i16>;
    type Part = Posit<10, 2, i16>;
    for bits in [0b0000_0101_0011_1010, 0b1111_0101_0011_1010, 0b0101_0011_0011_1010] {
      assert_eq!(Full::from_bits(bits).to_bits(), bits);
    }
    for (bits, extended) in [
      (0b000001_01_0011_1010, 0b000000_01_0011_1010),
      (0b111101_01_0011_1010, 0b000000_01_0011_1010),
      (0b010100_11_0011_1010, 0b111111_11_0011_1010),
    ] {
      assert_eq!(Part::from_bits(bits).to_bits(), extended);
    }
  }

  #[test]
  fn predicates() {
    type P = Posit<10, 1, i16>;
    assert!(P::NAR.is_nar() && !P::NAR.is_zero() && !P::NAR.is_negative());
    assert!(P::ZERO.is_zero() && !P::ZERO.is_nar() && !P::ZERO.is_negative());
    assert!(P::MIN.is_negative() && P::MAX_NEGATIVE.is_negative() && P::MINUS_ONE.is_negative());
    assert!(!P::MAX.is_negative() && !P::MIN_POSITIVE.is_negative());
  }
}

/// Each of these must fail to build: too few bits, more bits than the `Int`, or too many
/// exponent bits.
///
/// ```compile_fail
/// let _ = posit_quire::Posit::<2, 0, i8>::BITS;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<2, 2, i32>::BITS;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<9, 0, i8>::BITS;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<33, 2, i32>::BITS;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<65, 3, i64>::BITS;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<8, 4, i8>::ES;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<32, 24, i32>::ES;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<64, 23, i64>::ES;
/// ```
/// ```compile_fail
/// let _ = posit_quire::Posit::<16, 17, i32>::ES;
/// ```
#[cfg(doctest)]
pub struct InvalidParameters;

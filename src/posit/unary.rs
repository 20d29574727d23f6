use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Returns the posit whose bit pattern comes right after `self`'s, i.e. the next posit in
  /// increasing order. Going up from [`Self::MAX`] gives [NaR](Self::NAR), and [NaR](Self::NAR)
  /// stays NaR.
  ///
  /// ```
  /// # use posit_quire::p8;
  /// assert_eq!(p8::ZERO.next(), p8::MIN_POSITIVE);
  /// assert_eq!(p8::MAX_NEGATIVE.next(), p8::ZERO);
  /// assert_eq!(p8::MAX.next(), p8::NAR);
  /// assert_eq!(p8::NAR.next(), p8::NAR);
  /// ```
  ///
  /// Standard: "**next**".
  #[inline]
  pub fn next(self) -> Self {
    if self == Self::NAR {
      self
    } else {
      Self::from_bits(self.0.wrapping_add(Int::ONE))
    }
  }

  /// Returns the posit whose bit pattern comes right before `self`'s, i.e. the previous posit in
  /// increasing order. Going down from [`Self::MIN`] gives [NaR](Self::NAR), and
  /// [NaR](Self::NAR) stays NaR.
  ///
  /// Standard: "**prior**".
  #[inline]
  pub fn prior(self) -> Self {
    if self == Self::NAR {
      self
    } else {
      Self::from_bits(self.0.wrapping_sub(Int::ONE))
    }
  }

  /// Return the absolute value of `self`. Does not round; NaR stays NaR.
  ///
  /// Standard: "**abs**".
  #[inline]
  pub fn abs(self) -> Self {
    Posit::from_bits(self.0.wrapping_abs())
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  /// Does not round; NaR stays NaR.
  ///
  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for &Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

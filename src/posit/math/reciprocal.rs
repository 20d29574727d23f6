use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// `1 / self`, rounded. NaR if `self` is 0 or NaR.
  ///
  /// Only powers of two have an exact reciprocal. Posits are symmetric about 1, so the extremes
  /// swap: `MAX` and `MIN_POSITIVE` are each other's reciprocals.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p16::round_from(8).reciprocal(), p16::round_from(0.125));
  /// assert_eq!(p16::round_from(3).reciprocal(), p16::ONE / p16::round_from(3));
  /// assert_eq!(p16::MAX.reciprocal(), p16::MIN_POSITIVE);
  /// assert_eq!(p16::ZERO.reciprocal(), p16::NAR);
  /// ```
  pub fn reciprocal(self) -> Self {
    Self::ONE.div(self)
  }
}

use super::*;

use crate::posit::value::Value;

// `RoundFrom<Posit<..>> for Posit<..>` would overlap with `RoundFrom<T> for T`, so converting
// between posit types is a method instead.

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// With equal `ES`, a posit of either width is the other's bit pattern padded with zeroes or cut
  /// short, and rounding to nearest posit is rounding to nearest bit pattern.
  fn resize<
    const N2: u32,
    const ES2: u32,
    Int2: crate::Int,
  >(self) -> Posit<N2, ES2, Int2> {
    let bits: i128 = self.to_bits().into();
    let wide = bits << (128 - N);
    let kept = wide >> (128 - N2);
    // What `kept` leaves out: its top bit is the round bit, and the rest are sticky.
    let dropped = wide << N2;
    let (round, sticky) = (dropped < 0, dropped << 1 != 0);
    let is_special = kept == 0 || kept == i128::MIN >> (128 - N2);
    // Ties to even; a nonzero, non-NaR source must also move off 0 and NaR.
    let round_up = (round && (sticky || kept & 1 == 1)) || (is_special && (round || sticky));
    let rounded = kept + i128::from(round_up);
    // Up from `MAX` wraps to NaR and up from `MAX_NEGATIVE` wraps to 0; those stay put.
    let bits = if round_up && (rounded == 1 << (N2 - 1) || rounded == 0) { kept } else { rounded };
    Posit::from_bits(Int2::of_i128(bits))
  }

  /// Convert to a posit of another type, rounding (see [Rounding](RoundFrom#rounding)). Between
  /// types with the same `ES`, as all the standard ones, a wider target is always exact.
  ///
  /// Standard: "**convertPositToPosit**".
  ///
  /// ```
  /// # use posit_quire::*;
  /// let third = p64::ONE / p64::round_from(3);
  /// let narrow: p16 = third.convert();
  /// assert_eq!(narrow, p16::ONE / p16::round_from(3));
  /// assert_eq!(narrow.convert::<64, 2, i64>(), p64::round_from(f64::round_from(narrow)));
  /// assert_eq!(p32::NAR.convert::<8, 2, i8>(), p8::NAR);
  /// ```
  pub fn convert<
    const N2: u32,
    const ES2: u32,
    Int2: crate::Int,
  >(self) -> Posit<N2, ES2, Int2> {
    if const { ES == ES2 } {
      self.resize()
    } else {
      Posit::round_from(Value::from(self))
    }
  }
}

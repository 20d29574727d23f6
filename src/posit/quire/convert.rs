use super::*;

use crate::{Error, RoundFrom};
use crate::posit::value::{Repr, Value};

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// The 128 bits of the quire starting at bit `lo` (which may be negative, or go past the top),
  /// as if the quire were extended with zeros on the right and with its sign on the left.
  fn window(&self, lo: i32) -> u128 {
    let quire = self.as_u64_array();
    let sign = ((quire[quire.len() - 1] as i64) >> 63) as u64;
    let limb = |i: i32| -> u64 {
      if i < 0 { 0 } else { quire.get(i as usize).copied().unwrap_or(sign) }
    };
    let (i, bit) = (lo.div_euclid(64), lo.rem_euclid(64) as u32);
    let low = limb(i) as u128 | (limb(i + 1) as u128) << 64;
    if bit == 0 {
      low
    } else {
      low >> bit | (limb(i + 2) as u128) << (128 - bit)
    }
  }

  /// The contents of the quire as a [`Value`]: the 128 most significant bits, starting from the
  /// leading one (or zero, for negative numbers), and a sticky flag for whatever is left below
  /// them. Rounding the result to a posit is the same as rounding the exact contents.
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q16::ZERO;
  /// quire.add_product(p16::MAX, p16::MAX)?;
  /// quire.add_product(p16::MIN_POSITIVE, p16::MIN_POSITIVE)?;
  /// let sum = quire.to_value();
  /// assert!(!sum.is_exact());  // 2^112 + 2^-112 needs more than 128 bits
  /// assert_eq!(sum.scale(), Some(112));
  /// assert_eq!(p16::round_from(sum), p16::MAX);
  /// # Ok::<(), Error>(())
  /// ```
  pub fn to_value(&self) -> Value {
    if self.is_nar() {
      return Value::NAR
    }
    let quire = self.as_u64_array();
    let sign = ((quire[quire.len() - 1] as i64) >> 63) as u64;
    let Some(top) = quire.iter().rposition(|&limb| limb != sign) else {
      // Nothing but the sign: 0 or -1 units in the last place.
      return if sign == 0 { Value::ZERO } else { Value::from_scaled(-1, -(Self::WIDTH as i32)) }
    };
    // The highest bit that differs from the sign is the leading bit of the fraction, which sits
    // one place below the fraction's own sign bit.
    let lead = top as i32 * 64 + 63 - (quire[top] ^ sign).leading_zeros() as i32;
    let lo = lead - Value::FRAC_WIDTH as i32;
    let frac = self.window(lo) as i128;
    let sticky = lo > 0 && {
      let (i, bit) = (lo as usize / 64, lo as u32 % 64);
      quire[.. i].iter().any(|&limb| limb != 0) || quire[i] & ((1 << bit) - 1) != 0
    };
    Value(Repr::Regular { frac, exp: lead - Self::WIDTH as i32, sticky })
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
  const SIZE: usize,
> RoundFrom<&'_ Quire<N, ES, SIZE>> for Posit<N, ES, Int> {
  /// Round the accumulated sum to the nearest posit; the only rounding in a chain of quire
  /// operations.
  ///
  /// Standard: "**qToP**".
  fn round_from(value: &'_ Quire<N, ES, SIZE>) -> Self {
    Self::round_from(value.to_value())
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
  const SIZE: usize,
> From<Posit<N, ES, Int>> for Quire<N, ES, SIZE> {
  /// Create a quire from a posit value. Exact, since every posit is well within the range of
  /// every quire of at least [`Quire::MIN_SIZE`].
  ///
  /// Standard: "**pToQ**".
  fn from(value: Posit<N, ES, Int>) -> Self {
    let mut quire = Self::ZERO;
    match quire.add_posit(value) {
      Ok(()) => quire,
      Err(_) => Self::NAR,
    }
  }
}

/// Conversions from native numbers. These are exact, but fail if the number does not fit the
/// quire (see [`Quire::add_value`]). A NaN or infinite float becomes NaR.
macro_rules! make_impl {
  ($($t:ty),*) => {
    $(
      impl<
        const N: u32,
        const ES: u32,
        const SIZE: usize,
      > TryFrom<$t> for Quire<N, ES, SIZE> {
        type Error = Error;

        fn try_from(value: $t) -> Result<Self, Self::Error> {
          let mut quire = Self::ZERO;
          quire.add_value(Value::from(value))?;
          Ok(quire)
        }
      }
    )*
  }
}

make_impl!{f64, i64, u64}

use super::*;

use core::fmt::{Debug, Display};

/// `len` bits of `x`, starting from bit `lo`.
fn bit_range<Int: crate::Int>(x: Int, lo: u32, len: u32) -> u128 {
  let x: i128 = x.into();
  if len == 0 { 0 } else { (x as u128 >> lo) & (u128::MAX >> (128 - len)) }
}

/// The bit pattern, with any bits above `N` (copies of the sign) set apart by a `_`.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let posit = bit_range(self.0, 0, Self::BITS);
    let width = Self::BITS as usize;
    if Self::JUNK_BITS == 0 {
      write!(f, "Posit(0b{posit:0width$b})")
    } else {
      let junk = bit_range(self.0, Self::BITS, Self::JUNK_BITS);
      let junk_width = Self::JUNK_BITS as usize;
      write!(f, "Posit(0b{junk:0junk_width$b}_{posit:0width$b})")
    }
  }
}

/// Prints the value of the posit, as the nearest `f64` would be printed, or `NaR`. Formatting
/// options (precision, sign, exponent notation via `{:e}`) are those of `f64`.
///
/// ```
/// # use posit_quire::{p16, RoundFrom};
/// assert_eq!(p16::round_from(-2.5).to_string(), "-2.5");
/// assert_eq!(format!("{:.3}", p16::ONE), "1.000");
/// assert_eq!(p16::NAR.to_string(), "NaR");
/// ```
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Display for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if *self == Self::NAR {
      f.pad("NaR")
    } else {
      use crate::RoundFrom;
      Display::fmt(&f64::round_from(*self), f)
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> core::fmt::LowerExp for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if *self == Self::NAR {
      f.pad("NaR")
    } else {
      use crate::RoundFrom;
      core::fmt::LowerExp::fmt(&f64::round_from(*self), f)
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Decoded<N, ES, Int> {
  /// `frac` as hidden bits, fraction bits and the lowest bit; `exp` as regime and exponent bits,
  /// then in decimal.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = Int::BITS;
    let hidden = bit_range(self.frac, bits - 2, 2);
    let fraction = bit_range(self.frac, 1, bits - 3);
    let last = bit_range(self.frac, 0, 1);
    let regime = bit_range(self.exp, ES, bits - ES);
    let exponent = bit_range(self.exp, 0, ES);
    let exp: i128 = self.exp.into();
    let (wf, wr, we) = ((bits - 3) as usize, (bits - ES) as usize, ES as usize);
    f.debug_struct("Decoded")
      .field("frac", &format_args!("0b{hidden:02b}_{fraction:0wf$b}_{last:b}"))
      .field("exp", &format_args!("0b{regime:0wr$b}_{exponent:0we$b} ({exp:+})"))
      .finish()
  }
}

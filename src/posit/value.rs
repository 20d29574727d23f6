use super::*;
use crate::RoundFrom;

/// A real number (or NaR) in an extended format that every posit, every native number, and every
/// product of two posits fits in exactly; the common currency of conversions and of the
/// [`Quire`](crate::Quire).
///
/// A `Value` is zero, NaR, or a 128-bit two's complement fraction in `[1, 2[` or `[-2, -1[`
/// times a power of two, plus a *sticky* flag recording whether any nonzero bits were lost below
/// the fraction (in which case the true value lies strictly between the stored one and the next
/// one up).
///
/// ```
/// # use posit_quire::{p16, Value, RoundFrom};
/// let v = Value::from(p16::round_from(-12));
/// assert!(v.is_negative() && v.is_exact());
/// assert_eq!(v.scale(), Some(3));
/// assert_eq!(Value::from_scaled(-3, 2), v);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value(pub(crate) Repr);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Repr {
  Zero,
  NaR,
  /// `frac / 2^126 × 2^exp`, with `frac` starting with `0b01` or `0b10`. `sticky` means some
  /// positive amount smaller than one unit of `frac` was dropped.
  Regular { frac: i128, exp: i32, sticky: bool },
}

impl Value {
  /// Number of bits after the binary point in a regular value's `frac`.
  pub(crate) const FRAC_WIDTH: u32 = 126;

  /// Zero.
  pub const ZERO: Self = Self(Repr::Zero);

  /// NaR ("not a real").
  pub const NAR: Self = Self(Repr::NaR);

  /// The exact value `int × 2^scale`.
  ///
  /// ```
  /// # use posit_quire::{p32, Value, RoundFrom};
  /// assert_eq!(p32::round_from(Value::from_scaled(5, -2)), p32::round_from(1.25));
  /// ```
  pub fn from_scaled(int: i128, scale: i32) -> Self {
    if int == 0 {
      return Self::ZERO
    }
    // Shift so that the two top bits differ, i.e. the fraction is normalised.
    let unnormalised = (int ^ (int << 1)).leading_zeros();
    let frac = int << unnormalised;
    let exp = scale.saturating_add(Self::FRAC_WIDTH as i32 - unnormalised as i32);
    Self(Repr::Regular { frac, exp, sticky: false })
  }

  /// Mark a regular value as having lost some positive amount below its last bit.
  pub(crate) fn with_sticky(self, sticky: bool) -> Self {
    match self.0 {
      Repr::Regular { frac, exp, sticky: was } =>
        Self(Repr::Regular { frac, exp, sticky: was || sticky }),
      Repr::Zero | Repr::NaR => self,
    }
  }

  /// Checks whether `self` is zero.
  pub fn is_zero(self) -> bool {
    self.0 == Repr::Zero
  }

  /// Checks whether `self` is NaR.
  pub fn is_nar(self) -> bool {
    self.0 == Repr::NaR
  }

  /// Checks whether `self` is strictly less than zero.
  pub fn is_negative(self) -> bool {
    matches!(self.0, Repr::Regular { frac, .. } if frac < 0)
  }

  /// Checks whether `self` is exactly the number it stands for, i.e. no bits were lost when it was
  /// computed. Zero and NaR are exact.
  pub fn is_exact(self) -> bool {
    !matches!(self.0, Repr::Regular { sticky: true, .. })
  }

  /// The power of two of the leading bit of `|self|`, i.e. `floor(log2(|self|))`, or `None` for
  /// zero and NaR.
  pub fn scale(self) -> Option<i32> {
    match self.0 {
      Repr::Regular { frac, exp, sticky } => {
        // -2 × 2^exp is the only fraction whose magnitude reaches the next power of two.
        if frac == i128::MIN && !sticky { Some(exp + 1) } else { Some(exp) }
      },
      Repr::Zero | Repr::NaR => None,
    }
  }

  /// The power of two of the lowest nonzero bit of `self`, for a nonzero real `self`.
  pub(crate) fn lsb(self) -> Option<i32> {
    match self.0 {
      Repr::Regular { frac, exp, .. } =>
        Some(exp - Self::FRAC_WIDTH as i32 + frac.trailing_zeros() as i32),
      Repr::Zero | Repr::NaR => None,
    }
  }
}

impl core::ops::Neg for Value {
  type Output = Value;

  /// Exact, including the sticky flag: the interval `]x, x + ε[` becomes `]-x - ε, -x[`.
  fn neg(self) -> Self::Output {
    let Repr::Regular { frac, exp, sticky } = self.0 else { return self };
    let (frac, exp) =
      if sticky {
        (!frac, exp)
      } else if frac == i128::MIN {
        (1 << Self::FRAC_WIDTH, exp + 1)
      } else if frac == 1 << Self::FRAC_WIDTH {
        (i128::MIN, exp - 1)
      } else {
        (-frac, exp)
      };
    Self(Repr::Regular { frac, exp, sticky })
  }
}

impl core::fmt::Debug for Value {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.0 {
      Repr::Zero => f.write_str("Value(0)"),
      Repr::NaR => f.write_str("Value(NaR)"),
      Repr::Regular { frac, exp, sticky } => f.debug_struct("Value")
        .field("frac", &format_args!("{frac:#034x}"))
        .field("exp", &exp)
        .field("sticky", &sticky)
        .finish(),
    }
  }
}

/// Exact.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> From<Posit<N, ES, Int>> for Value {
  fn from(value: Posit<N, ES, Int>) -> Self {
    match value.try_decode() {
      Ok(decoded) => {
        let frac: i128 = decoded.frac.into();
        let exp: i128 = decoded.exp.into();
        Self(Repr::Regular {
          frac: frac << (128 - Int::BITS),
          // Posit exponents are far smaller than this; the clamp only keeps the cast lossless.
          exp: exp.clamp(i32::MIN.into(), i32::MAX.into()) as i32,
          sticky: false,
        })
      },
      Err(special) if special == Posit::NAR => Self::NAR,
      Err(_) => Self::ZERO,
    }
  }
}

/// Round a [`Value`] to the nearest posit. This is the single rounding step behind every
/// conversion into a posit and behind [`Quire`](crate::Quire) results.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> RoundFrom<Value> for Posit<N, ES, Int> {
  fn round_from(value: Value) -> Self {
    match value.0 {
      Repr::Zero => Self::ZERO,
      Repr::NaR => Self::NAR,
      Repr::Regular { frac, exp, sticky } => {
        let lost_width = 128 - Int::BITS;
        let lost = frac & ((1 << lost_width) - 1);
        let sticky = Int::from(sticky || lost != 0);
        let frac = Int::of_i128(frac >> lost_width);
        // Any exponent this far out saturates all the same; clamping it keeps `exp >> ES` a small
        // regime whose top bits are a sign extension.
        let exp_limit = 1i128 << (Int::BITS - 2);
        let exp = Int::of_i128(i128::from(exp).clamp(-exp_limit, exp_limit - 1));
        let decoded = Decoded { frac, exp };
        // SAFETY: `frac` is the top of a normalised fraction, and `exp` was clamped above
        unsafe { decoded.encode_regular_round(sticky) }
      },
    }
  }
}

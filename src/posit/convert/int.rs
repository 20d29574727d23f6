use super::*;

use crate::posit::value::{Repr, Value};

impl Value {
  /// Round to the nearest integer, ties to even, or `None` for NaR. Magnitudes from `2^126` up
  /// saturate to `i128::MIN` or `i128::MAX`.
  pub(crate) fn round_to_i128(self) -> Option<i128> {
    let (frac, exp, sticky) = match self.0 {
      Repr::Zero => return Some(0),
      Repr::NaR => return None,
      Repr::Regular { frac, exp, sticky } => (frac, exp, sticky),
    };
    // `|self| < 2^(exp + 1)`, which is at most one half, and ties go to 0.
    if exp < -1 {
      return Some(0)
    }
    let shift = Value::FRAC_WIDTH as i32 - exp;
    if shift <= 0 {
      return Some(if frac < 0 {i128::MIN} else {i128::MAX})
    }
    // Here `1 <= shift <= 127`. `frac >> shift` is the floor; what's left decides the rounding,
    // with `sticky` adding a little more than nothing to it.
    let shift = shift as u32;
    let floor = frac >> shift;
    let rest = frac & !(-1i128 << shift);
    let half = 1i128 << (shift - 1);
    let round_up = rest > half || (rest == half && (sticky || floor & 1 == 1));
    Some(floor + i128::from(round_up))
  }
}

macro_rules! make_impl {
  ($signed:ty, $unsigned:ty) => {
    /// Exact.
    impl From<$signed> for Value {
      fn from(value: $signed) -> Self {
        Value::from_scaled(i128::from(value), 0)
      }
    }

    /// Exact.
    impl From<$unsigned> for Value {
      fn from(value: $unsigned) -> Self {
        Value::from_scaled(i128::from(value), 0)
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$signed> for Posit<N, ES, Int> {
      #[doc = concat!("Round an `", stringify!($signed), "` to the nearest posit (see [Rounding](RoundFrom#rounding)). Every `", stringify!($signed), "` is a number, [`", stringify!($signed), "::MIN`] included.")]
      ///
      /// Standard: "**convertIntToPosit**".
      fn round_from(value: $signed) -> Self {
        Posit::round_from(Value::from(value))
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$unsigned> for Posit<N, ES, Int> {
      #[doc = concat!("Round a `", stringify!($unsigned), "` to the nearest posit (see [Rounding](RoundFrom#rounding)).")]
      fn round_from(value: $unsigned) -> Self {
        Posit::round_from(Value::from(value))
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $signed {
      #[doc = concat!("Round a posit to the nearest `", stringify!($signed), "`, ties to even, saturating at [`", stringify!($signed), "::MIN`] and [`", stringify!($signed), "::MAX`]. [NaR](Posit::NAR) gives `", stringify!($signed), "::MIN`.")]
      ///
      /// Standard: "**convertPositToInt**".
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        match Value::from(value).round_to_i128() {
          Some(int) => int.clamp(<$signed>::MIN.into(), <$signed>::MAX.into()) as $signed,
          None => <$signed>::MIN,
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $unsigned {
      #[doc = concat!("Round a posit to the nearest `", stringify!($unsigned), "`, ties to even, saturating at 0 and [`", stringify!($unsigned), "::MAX`]. [NaR](Posit::NAR) gives 0.")]
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        let int = Value::from(value).round_to_i128().unwrap_or(0);
        int.clamp(0, <$unsigned>::MAX.into()) as $unsigned
      }
    }
  }
}

make_impl!{i8, u8}
make_impl!{i16, u16}
make_impl!{i32, u32}
make_impl!{i64, u64}

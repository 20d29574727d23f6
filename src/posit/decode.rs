use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Decode a posit into its constituent `frac`tion and `exp`onent. The core logic lives in
  /// [Self::decode_regular].
  ///
  /// If `self` is 0 or NaR, there is nothing to decode: return `Err(self)` instead.
  #[inline]
  pub(crate) fn try_decode(self) -> Result<Decoded<N, ES, Int>, Self> {
    if self == Self::ZERO || self == Self::NAR {
      Err(self)
    } else {
      // SAFETY: `self` is not 0 or NaR
      Ok(unsafe { self.decode_regular() })
    }
  }

  /// Decode a posit **which is not 0 or NaR** into its constituent `frac`tion and `exp`onent.
  ///
  /// # Safety
  ///
  /// `self` cannot be 0 or NaR, or calling this function is *undefined behaviour*.
  pub(crate) unsafe fn decode_regular(self) -> Decoded<N, ES, Int> {
    // Everything is done on the two's complement bits as they are, without taking the absolute
    // value first, and without branches: the sign only ever enters through xors and
    // `not_if_negative`/`not_if_positive`.
    let x = self.0 << Self::JUNK_BITS;
    debug_assert!(
      x != Int::ZERO && x != Int::MIN,
      "Safety precondition violated: {self:?} cannot be 0 or NaR",
    );

    // `x ^ (x << 1)` has a 1 wherever a bit differs from the next one, so after dropping the sign
    // its leading zeros are the length of the regime run minus one.
    //
    //   x = 0b10001…   x ^ (x << 1) = 0b1001…   regime_raw = 2
    //   x = 0b011110…  x ^ (x << 1) = 0b10001…  regime_raw = 3
    let x_xor = x ^ (x << 1);
    // SAFETY: `x` is not 0 or NaR, so some bit below the sign differs from the one above it
    let regime_raw = unsafe { (x_xor << 1).leading_zeros_nonzero() };
    debug_assert!(regime_raw <= Self::BITS - 2);

    // A run of `n` ones (on the absolute value) is regime `n - 1 = regime_raw`, and a run of `n`
    // zeros is regime `-n = !(n - 1) = !regime_raw`. Which of the two applies is the sign bit
    // xor the first regime bit, i.e. the msb of `x_xor`.
    let regime = Int::of_u32(regime_raw).not_if_positive(x_xor);

    // Drop the sign, the run, and the closing bit.
    let y = (x << regime_raw) << 3;

    // The top ES bits of `y` are the exponent, complemented if the posit is negative. With ES = 0
    // there is nothing to extract.
    let exponent =
      if const { Self::ES != 0 } {
        y.not_if_negative(x).lshr(Int::BITS - Self::ES)
      } else {
        Int::ZERO
      };

    // The rest is the fraction, which keeps the posit's sign as it is.
    let fraction =
      if const { Self::ES == 2 } {
        y.mask_lsb(Int::BITS - 2)
      } else {
        (y << Self::ES).lshr(2)
      };

    // Hidden bits: `0b01` (+1) for a positive posit, `0b10` (-2) for a negative one. This is why a
    // negative `frac` is `-2 + 0.ffff`, with an `exp` one lower than its positive counterpart.
    let frac = Int::MIN.lshr(x.is_positive() as u32) + fraction;
    let exp = (regime << Self::ES) + exponent;
    Decoded{frac, exp}
  }
}

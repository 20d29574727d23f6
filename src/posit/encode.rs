use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// Encode `self` into a posit, rounding to nearest with ties to the even bit pattern, and never
  /// rounding to 0 or to NaR: values beyond [`Posit::MAX`] or below [`Posit::MIN_POSITIVE`] in
  /// magnitude saturate to them.
  ///
  /// `sticky` stands for every bit below `self.frac` that was lost on the way here: it must be
  /// `Int::ZERO` **if and only if** all of those bits were 0. Note that `frac` and `exp` are
  /// always rounded towards -∞ (lost bits only ever count as a positive amount), which holds for
  /// negative numbers too.
  ///
  /// # Safety
  ///
  /// `self` must be [normalised](Self::is_normalised); anything else is undefined behaviour.
  pub(crate) unsafe fn encode_regular_round(self, mut sticky: Int) -> Posit<N, ES, Int> {
    debug_assert!(self.is_normalised(), "encoding a denormalised {self:?}");

    // The regime `r` is `exp` without its low ES bits. On a positive posit, `r >= 0` is written
    // as `r + 1` ones and a closing zero, and `r < 0` as `-r` zeros and a closing one; a negative
    // posit is the two's complement, which swaps ones and zeros. So whether the run is of ones
    // depends only on the sign of `r ^ frac`, and the top two bits of `!(frac ^ exp)` already
    // hold the first bit of the run and the one after it. An arithmetic shift by the run length
    // minus one stretches them into the whole run:
    //
    //   r = 3,  positive: 0b10… >> 3 = 0b11110…
    //   r = -3, positive: 0b01… >> 2 = 0b0001…
    //   r = 3,  negative: 0b01… >> 3 = 0b00001…
    let r = self.exp >> ES;
    let run = r.not_if_negative(r).as_u32();

    // A run longer than `BITS - 3` saturates: cap it, don't round, and set the lsb, which gives
    // MAX, MIN, MIN_POSITIVE or MAX_NEGATIVE.
    let run_cap = Self::BITS - 3;
    let saturated = run > run_cap;
    let run = if saturated {run_cap} else {run};

    let head = (!(self.frac ^ self.exp)).mask_msb(2) >> run;
    let head = (self.frac.mask_msb(1) | head.lshr(1)) >> Self::JUNK_BITS;

    // Then the exponent bits (complemented if negative) and the fraction without its two leading
    // bits, left aligned, and moved right past the sign, the run and its closing bit.
    let exponent = if const { ES != 0 } {
      self.exp.not_if_negative(self.frac) << (Int::BITS - ES)
    } else {
      Int::ZERO
    };
    let tail = (exponent | (self.frac << 2).lshr(Self::ES)).lshr(Self::JUNK_BITS);

    // Round to nearest, ties to even: with `round` the first bit cut off and `sticky` everything
    // below it, add one when `round & (sticky != 0 | lsb)`.
    if const { Self::JUNK_BITS + Self::ES > 2 } {
      sticky |= self.frac.mask_lsb(Self::JUNK_BITS + Self::ES - 2);
    };
    sticky |= tail.mask_lsb(2 + run);
    let tail = tail.lshr(2 + run);
    let round = tail.get_lsb();
    let bits = head | tail.lshr(1);
    let round_up = round & (bits.get_lsb() | (sticky != Int::ZERO));

    // A carry ripples from the fraction into the exponent and the run, and stops short of NaR
    // because the run is capped.
    let bits = bits + Int::from(round_up & !saturated);
    // SAFETY: `head` was shifted right arithmetically and `tail` logically by at least as much,
    // so the bits above `BITS` copy bit `BITS - 1`.
    unsafe { Posit::from_bits_unchecked(bits | Int::from(saturated)) }
  }

  /// Checked [`Self::encode_regular_round`]: `Err(())` if `self` isn't normalised.
  #[cfg(test)]
  pub(crate) fn try_encode_round(self, sticky: Int) -> Result<Posit<N, ES, Int>, ()> {
    // SAFETY: normalised
    self.is_normalised().then(|| unsafe { self.encode_regular_round(sticky) }).ok_or(())
  }

  #[cfg(test)]
  pub(crate) fn try_encode(self) -> Result<Posit<N, ES, Int>, ()> {
    self.try_encode_round(Int::ZERO)
  }
}

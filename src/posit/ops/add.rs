use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Sum of two regular decoded posits, normalised, together with the bits of the smaller operand
  /// that fell below the window (nonzero means the true sum is a little more than the result).
  ///
  /// # Safety
  ///
  /// Both operands must be [normalised](Decoded::is_normalised) and must not cancel out exactly
  /// (`x != -y`); otherwise the behaviour is undefined.
  #[inline]
  pub(crate) unsafe fn add_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, Int) {
    // Put the larger scale in `big` and align `small` to it. Past `Int::BITS` places nothing of
    // `small` survives in the window and it only feeds the sticky bits.
    let gap = x.exp - y.exp;
    let (big, small) = if gap.is_positive() { (x, y) } else { (y, x) };
    let gap = gap.abs().as_u32();
    if gap >= Int::BITS {
      return (big, small.frac)
    };
    let aligned = small.frac >> gap;

    // Same signs: the sum reaches `[2, 4)` (or `[-4, -2)`) and needs one place to the right,
    // with the scale bumped by one. `overflowing_add_shift` does both, and the bit it drops is
    // the lsb of the full sum.
    //
    //     0b01_0100 (1.25) + 0b01_0000 (1.0) = 0b10_0100 (2.25) -> 0b01_0010 × 2¹
    let (frac, carried) = big.frac.overflowing_add_shift(aligned);
    let dropped = carried & (big.frac ^ aligned).get_lsb();
    let exp = big.exp + carried.into();

    // Opposite signs: the sum can lose any number of leading places, which are then shifted back
    // in from the left and taken off the scale.
    //
    //     0b10_1100 (-1.25) + 0b01_0000 (1.0) = 0b11_1100 (-0.25) -> 0b10_0000 × 2¯³
    //
    // SAFETY: the operands don't cancel, so `frac` is not 0, and it is not -1 because the lsb
    // of a decoded `frac` is 0.
    let lead = unsafe { frac.leading_run_minus_one() };
    let frac = frac << lead;
    let exp = exp - Int::of_u32(lead);

    // Shifting left by `lead` opens `lead` places at the bottom; refill them from the bits of
    // `small.frac` that alignment had pushed out. What is still below the window is sticky.
    //
    //     small.frac               = 0b11110101|       gap = 4, lead = 3
    //     small.frac >> gap        = 0b00001111|0101
    //     small.frac >> (gap-lead) = 0b01111010|1
    let remaining = gap.saturating_sub(lead);
    let refill = small.frac.mask_lsb(gap) >> remaining;
    let sticky = small.frac.mask_lsb(remaining) | Int::from(dropped);

    (Decoded { frac: frac | refill, exp }, sticky)
  }

  pub(crate) fn add(self, other: Self) -> Self {
    let sum = self.0.wrapping_add(other.0);
    if self == Self::NAR || other == Self::NAR {
      Self::NAR
    } else if self == Self::ZERO || other == Self::ZERO {
      // `sum` is whichever one isn't zero.
      Self(sum)
    } else if sum == Int::ZERO {
      Self::ZERO
    } else {
      // SAFETY: both are regular, and they don't cancel because `sum != 0`.
      let (result, sticky) = unsafe {
        Self::add_kernel(self.decode_regular(), other.decode_regular())
      };
      // SAFETY: `add_kernel` returns a normalised result.
      unsafe { result.encode_regular_round(sticky) }
    }
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}

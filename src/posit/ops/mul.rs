use super::*;

use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The product of two posits is always exact as a [`Value`](crate::Value) (a `2 × FRAC_WIDTH`
  /// bit fraction fits comfortably in 128 bits), so a correctly rounded `self × other` is just
  /// that product, rounded once. The same product is what the quire accumulates.
  pub(crate) fn mul(self, other: Self) -> Self {
    Self::round_from(crate::quire_mul(self, other))
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}

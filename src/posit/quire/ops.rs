use super::*;

use crate::posit::value::Value;

// Operators can't return an error, so on failure the quire becomes NaR, the same as if NaR had
// been added to it.

macro_rules! quire_assign {
  ($trait:ident, $name:ident, $method:ident, $doc:literal) => {
    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
      const SIZE: usize,
    > core::ops::$trait<Posit<N, ES, Int>> for Quire<N, ES, SIZE> {
      #[doc = $doc]
      fn $name(&mut self, rhs: Posit<N, ES, Int>) {
        if self.$method(rhs).is_err() { *self = Self::NAR }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
      const SIZE: usize,
    > core::ops::$trait<&Posit<N, ES, Int>> for Quire<N, ES, SIZE> {
      #[doc = $doc]
      fn $name(&mut self, rhs: &Posit<N, ES, Int>) {
        core::ops::$trait::$name(self, *rhs)
      }
    }
  };
}

quire_assign!{AddAssign, add_assign, add_posit, "Standard: \"**qAddP**\"."}
quire_assign!{SubAssign, sub_assign, sub_posit, "Standard: \"**qSubP**\"."}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> core::ops::AddAssign<Value> for Quire<N, ES, SIZE> {
  /// Add an exact value; if it doesn't fit (see [`Quire::add_value`]) the quire becomes NaR.
  fn add_assign(&mut self, rhs: Value) {
    if self.add_value(rhs).is_err() { *self = Self::NAR }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> core::ops::SubAssign<Value> for Quire<N, ES, SIZE> {
  /// Subtract an exact value; if it doesn't fit (see [`Quire::sub_value`]) the quire becomes NaR.
  fn sub_assign(&mut self, rhs: Value) {
    if self.sub_value(rhs).is_err() { *self = Self::NAR }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> core::ops::AddAssign<&Quire<N, ES, SIZE>> for Quire<N, ES, SIZE> {
  /// Standard: "**qAddQ**".
  fn add_assign(&mut self, rhs: &Quire<N, ES, SIZE>) {
    if self.add_quire(rhs).is_err() { *self = Self::NAR }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> core::ops::SubAssign<&Quire<N, ES, SIZE>> for Quire<N, ES, SIZE> {
  /// Standard: "**qSubQ**".
  fn sub_assign(&mut self, rhs: &Quire<N, ES, SIZE>) {
    if self.sub_quire(rhs).is_err() { *self = Self::NAR }
  }
}

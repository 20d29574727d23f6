//! How exceptional operands are handled.

use crate::{Error, Posit};

/// What to do when an arithmetic operation meets a NaR operand or a zero divisor.
///
/// The operators `+ - * /` on [`Posit`] always behave like [`Policy::Propagate`]: the result is
/// NaR and the computation carries on. With [`Policy::Trap`], the methods of this type (and the
/// fused dot products on [`Quire`](crate::Quire)) instead return an [`Error`] describing which
/// operand was at fault.
///
/// A program typically picks one policy and keeps it in a `const`:
///
/// ```
/// use posit_quire::{p32, Error, Policy};
///
/// const POLICY: Policy = Policy::Trap;
/// assert_eq!(POLICY.div(p32::ONE, p32::ZERO), Err(Error::DivideByZero));
/// assert_eq!(Policy::Propagate.div(p32::ONE, p32::ZERO), Ok(p32::NAR));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Policy {
  /// Report NaR operands and division by zero as an [`Error`].
  Trap,
  /// Silently produce NaR, as the posit standard prescribes.
  #[default]
  Propagate,
}

impl Policy {
  /// Fails with [`Error::OperandIsNaR`] if `self` is [`Policy::Trap`] and `p` is NaR.
  #[inline]
  pub(crate) fn check_operand<const N: u32, const ES: u32, Int: crate::Int>(
    self,
    p: Posit<N, ES, Int>,
  ) -> Result<(), Error> {
    if self == Policy::Trap && p.is_nar() {
      Err(Error::OperandIsNaR)
    } else {
      Ok(())
    }
  }

  /// `a + b`, checking the operands according to `self`.
  pub fn add<const N: u32, const ES: u32, Int: crate::Int>(
    self,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) -> Result<Posit<N, ES, Int>, Error> {
    self.check_operand(a)?;
    self.check_operand(b)?;
    Ok(a + b)
  }

  /// `a - b`, checking the operands according to `self`.
  pub fn sub<const N: u32, const ES: u32, Int: crate::Int>(
    self,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) -> Result<Posit<N, ES, Int>, Error> {
    self.check_operand(a)?;
    self.check_operand(b)?;
    Ok(a - b)
  }

  /// `a * b`, checking the operands according to `self`.
  pub fn mul<const N: u32, const ES: u32, Int: crate::Int>(
    self,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) -> Result<Posit<N, ES, Int>, Error> {
    self.check_operand(a)?;
    self.check_operand(b)?;
    Ok(a * b)
  }

  /// `a / b`, checking the operands according to `self`.
  ///
  /// Under [`Policy::Trap`] the checks go in this order: a zero divisor, then a NaR divisor, then
  /// a NaR numerator.
  pub fn div<const N: u32, const ES: u32, Int: crate::Int>(
    self,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) -> Result<Posit<N, ES, Int>, Error> {
    if self == Policy::Trap {
      if b.is_zero() { return Err(Error::DivideByZero) }
      if b.is_nar() { return Err(Error::DivideByNaR) }
      if a.is_nar() { return Err(Error::NumeratorIsNaR) }
    }
    Ok(a / b)
  }
}

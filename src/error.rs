//! The crate-wide error type.

use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// The variants fall into two groups, see [`Error::is_arithmetic`] and [`Error::is_internal`]:
/// arithmetic errors are raised by operations on NaR or division by zero when the caller asked
/// for them to be reported ([`Policy::Trap`](crate::Policy::Trap)), and internal errors are
/// raised when a value doesn't fit where it's being put (a quire too small for a product, bit
/// fields too wide for a posit, mismatched vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("division by zero")]
  DivideByZero,
  #[error("division by NaR")]
  DivideByNaR,
  #[error("numerator is NaR")]
  NumeratorIsNaR,
  #[error("operand is NaR")]
  OperandIsNaR,
  #[error("operand scale {scale} is above the quire's maximum scale {max}")]
  OperandTooLarge { scale: i32, max: i32 },
  #[error("operand has bits at scale {lsb}, below the quire's minimum scale {min}")]
  OperandTooSmall { lsb: i32, min: i32 },
  #[error("operand is not exact and cannot be accumulated into a quire")]
  InexactOperand,
  #[error("quire accumulation overflowed")]
  QuireOverflow,
  #[error("vector lengths differ ({x} vs {y})")]
  LengthMismatch { x: usize, y: usize },
  #[error("strided index {index} out of bounds for a vector of length {len}")]
  StrideOutOfBounds { index: usize, len: usize },
  #[error("hidden bit position {hpos} does not fit in {max} bits")]
  HposTooLarge { hpos: u32, max: u32 },
  #[error("regime needs {rbits} bits, more than the {max} available")]
  RbitsTooLarge { rbits: u32, max: u32 },
}

impl Error {
  /// Errors coming from the arithmetic itself: operations on NaR and division by zero.
  pub const fn is_arithmetic(&self) -> bool {
    matches!(
      self,
      Self::DivideByZero | Self::DivideByNaR | Self::NumeratorIsNaR | Self::OperandIsNaR,
    )
  }

  /// Errors coming from a value not fitting the type it's being stored in.
  pub const fn is_internal(&self) -> bool {
    !self.is_arithmetic()
  }
}

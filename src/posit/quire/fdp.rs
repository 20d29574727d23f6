use super::*;

use crate::{Error, Policy, RoundFrom};

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// The fused dot product `Σ x[i] × y[i]`, computed exactly in a quire of this type and rounded
  /// once at the end.
  ///
  /// # Errors
  ///
  ///   - [`Error::LengthMismatch`] if `x` and `y` have different lengths.
  ///   - [`Error::OperandIsNaR`] if `policy` is [`Policy::Trap`] and an element is NaR. With
  ///     [`Policy::Propagate`] the result is NaR instead.
  ///   - [`Error::QuireOverflow`] if the sum overflows the quire.
  ///
  /// Standard: "**fdp**".
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let x = [p32::round_from(3e10), p32::round_from(1.5), p32::round_from(-3e10)];
  /// let y = [p32::round_from(2e10), p32::round_from(2.0), p32::round_from(2e10)];
  /// // Rounding after every step loses the 3 in between the two large products.
  /// let naive = x.iter().zip(&y).fold(p32::ZERO, |acc, (a, b)| acc + a * b);
  /// assert_eq!(naive, p32::ZERO);
  /// assert_eq!(q32::fdp(&x, &y, Policy::Propagate), Ok(p32::round_from(3)));
  /// assert!(q32::fdp(&x, &y[1 ..], Policy::Propagate).is_err());
  /// ```
  pub fn fdp<Int: crate::Int>(
    x: &[Posit<N, ES, Int>],
    y: &[Posit<N, ES, Int>],
    policy: Policy,
  ) -> Result<Posit<N, ES, Int>, Error> {
    if x.len() != y.len() {
      return Err(Error::LengthMismatch { x: x.len(), y: y.len() })
    }
    Self::fdp_stride(x.len(), x, 1, y, 1, policy)
  }

  /// The fused dot product of `n` elements of `x` and `y`, taken every `incx` and `incy` places
  /// respectively: `Σ x[i × incx] × y[i × incy]` for `i` in `0 .. n`.
  ///
  /// Fails with [`Error::StrideOutOfBounds`] if the last element of either vector is past its
  /// end; otherwise as [`Self::fdp`].
  ///
  /// ```
  /// # use posit_quire::*;
  /// // The diagonal of a 2×2 matrix, dotted with a vector.
  /// let m = [p16::round_from(2), p16::round_from(7), p16::round_from(7), p16::round_from(3)];
  /// let v = [p16::ONE, p16::round_from(-1)];
  /// assert_eq!(q16::fdp_stride(2, &m, 3, &v, 1, Policy::Trap), Ok(p16::MINUS_ONE));
  /// assert_eq!(
  ///   q16::fdp_stride(2, &m, 4, &v, 1, Policy::Trap),
  ///   Err(Error::StrideOutOfBounds { index: 4, len: 4 }),
  /// );
  /// ```
  pub fn fdp_stride<Int: crate::Int>(
    n: usize,
    x: &[Posit<N, ES, Int>],
    incx: usize,
    y: &[Posit<N, ES, Int>],
    incy: usize,
    policy: Policy,
  ) -> Result<Posit<N, ES, Int>, Error> {
    let mut quire = Self::ZERO;
    quire.fdp_qc(n, x, incx, y, incy, policy)?;
    Ok(Posit::round_from(&quire))
  }

  /// Accumulate the fused dot product of `n` elements of `x` and `y` (see [`Self::fdp_stride`])
  /// into `self`, without rounding. This is what allows a dot product to be split into several
  /// pieces, or to be added to other sums and products, and still be rounded only once.
  ///
  /// Bounds are checked before anything is accumulated. If an operand is rejected by `policy`
  /// or the quire overflows, the terms before it have already been added.
  ///
  /// ```
  /// # use posit_quire::*;
  /// let x = [p32::round_from(0.5), p32::round_from(0.25)];
  /// let y = [p32::round_from(4), p32::round_from(8)];
  /// let mut quire = q32::from(p32::round_from(-3));
  /// quire.fdp_qc(2, &x, 1, &y, 1, Policy::Trap)?;      // -3 + 0.5·4 + 0.25·8
  /// quire.fdp_qc(1, &x[1 ..], 1, &y, 1, Policy::Trap)?;  // + 0.25·4
  /// assert_eq!(p32::round_from(&quire), p32::round_from(2));
  /// # Ok::<(), Error>(())
  /// ```
  pub fn fdp_qc<Int: crate::Int>(
    &mut self,
    n: usize,
    x: &[Posit<N, ES, Int>],
    incx: usize,
    y: &[Posit<N, ES, Int>],
    incy: usize,
    policy: Policy,
  ) -> Result<(), Error> {
    if n == 0 {
      return Ok(())
    }
    check_stride(n, incx, x.len())?;
    check_stride(n, incy, y.len())?;
    for i in 0 .. n {
      // In bounds: `i * inc <= (n - 1) * inc < len`, as checked above.
      let (a, b) = (x[i * incx], y[i * incy]);
      policy.check_operand(a)?;
      policy.check_operand(b)?;
      self.add_product(a, b)?;
    }
    Ok(())
  }
}

/// Fails if element `n - 1` at stride `inc` is out of bounds for a vector of length `len`.
fn check_stride(n: usize, inc: usize, len: usize) -> Result<(), Error> {
  let index = (n - 1).checked_mul(inc).unwrap_or(usize::MAX);
  if index < len {
    Ok(())
  } else {
    Err(Error::StrideOutOfBounds { index, len })
  }
}

use super::*;

use crate::Error;
use crate::posit::value::{Repr, Value};

/// The exact product of two posits, as a [`Value`] (zero if either is zero, NaR if either is NaR).
///
/// The fraction of a [`Value`] is wide enough that this never rounds. Add it to a [`Quire`] with
/// [`Quire::add_value`], or round it to a posit for a correctly rounded `a × b`.
///
/// ```
/// # use posit_quire::*;
/// let a = p16::round_from(1.0009765625);  // 1 + 2^-10
/// let product = quire_mul(a, a);            // 1 + 2^-9 + 2^-20, exactly
/// assert_eq!(product, Value::from_scaled((1 << 20) + (1 << 11) + 1, -20));
/// assert_eq!(p16::round_from(product), a * a);
/// ```
pub fn quire_mul<const N: u32, const ES: u32, Int: crate::Int>(
  a: Posit<N, ES, Int>,
  b: Posit<N, ES, Int>,
) -> Value {
  match (a.try_decode(), b.try_decode()) {
    (Ok(x), Ok(y)) => {
      let (xf, yf): (i128, i128) = (x.frac.into(), y.frac.into());
      let (xe, ye): (i128, i128) = (x.exp.into(), y.exp.into());
      let frac_width = Decoded::<N, ES, Int>::FRAC_WIDTH as i128;
      // Any scale this far out is beyond every quire and saturates every posit.
      let limit = i128::from(i32::MAX / 2);
      let scale = (xe + ye - 2 * frac_width).clamp(-limit, limit);
      Value::from_scaled(xf * yf, scale as i32)
    },
    _ if a.is_nar() || b.is_nar() => Value::NAR,
    _ => Value::ZERO,
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// The core algorithm of the quire: adding a fixed-point number, given as up to three little
  /// endian `limbs` starting at limb `offset` and sign-extended with `implicit` to the top of
  /// the quire, to `self`.
  ///
  /// Limbs that fall beyond the end of the quire are ignored. On overflow, `self` is set to NaR
  /// and an error returned.
  ///
  /// ```text
  /// self   = [self[0], self[1], self[2], self[3] , self[4] , self[5] , self[6] , self[7] ]
  /// limbs  = [0      , 0      , 0      , limbs[0], limbs[1], implicit, implicit, implicit]
  /// offset = 3
  /// ```
  fn accumulate(&mut self, limbs: &[u64], offset: usize, implicit: u64) -> Result<(), Error> {
    let sign_before = self.sign_bit();
    let negative = implicit != 0;
    let quire: &mut [u64] = self.as_u64_array_mut();
    let len = quire.len();

    let mut carry = false;
    let mut i = offset;
    for &limb in limbs {
      if i >= len { break }
      let (r, o1) = quire[i].overflowing_add(limb);
      let (r, o2) = r.overflowing_add(carry as u64);
      quire[i] = r;
      carry = o1 | o2;
      i += 1;
    }

    // From now on, only `implicit` and the carry are added; when they cancel out (`0 + 0`, or
    // `-1 + 1` with the carry going on forever), nothing above changes any more.
    while i < len && carry != negative {
      let (r, o1) = quire[i].overflowing_add(implicit);
      let (r, o2) = r.overflowing_add(carry as u64);
      quire[i] = r;
      carry = o1 | o2;
      i += 1;
    }

    // Adding two numbers of the same sign overflows iff the result has the other sign. A result
    // that lands exactly on the NaR pattern is just as unusable.
    if sign_before == negative && self.sign_bit() != negative || self.is_nar() {
      log::debug!("quire overflow ({} bits), result is NaR", Self::BITS);
      *self = Self::NAR;
      return Err(Error::QuireOverflow)
    }
    Ok(())
  }

  /// Add an exact [`Value`] to `self`.
  ///
  /// If `value` is NaR, `self` becomes NaR; if `self` is NaR, it stays NaR. Both cases succeed.
  ///
  /// # Errors
  ///
  ///   - [`Error::InexactOperand`] if `value` is not exact (see [`Value::is_exact`]).
  ///   - [`Error::OperandTooLarge`] if the [scale](Value::scale) of `value` is above
  ///     [`Self::max_scale`].
  ///   - [`Error::OperandTooSmall`] if `value` has nonzero bits below 2 <sup>[`Self::min_scale`]</sup>.
  ///   - [`Error::QuireOverflow`] if the sum overflows the quire. `self` is then NaR.
  ///
  /// In all but the last case, `self` is left unchanged.
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q8::ZERO;
  /// quire.add_value(Value::from_scaled(3, -4))?;
  /// quire.add_value(Value::from_scaled(1, -4))?;
  /// assert_eq!(quire.to_value(), Value::from_scaled(1, -2));
  ///
  /// let tiny = Value::from_scaled(1, -60);
  /// assert_eq!(quire.add_value(tiny), Err(Error::OperandTooSmall { lsb: -60, min: -48 }));
  /// # Ok::<(), Error>(())
  /// ```
  pub fn add_value(&mut self, value: Value) -> Result<(), Error> {
    let Repr::Regular { frac, exp, sticky } = value.0 else {
      if value.is_nar() { *self = Self::NAR }
      return Ok(())
    };
    if self.is_nar() {
      return Ok(())
    }
    if sticky {
      return Err(Error::InexactOperand)
    }
    match (value.scale(), value.lsb()) {
      (Some(scale), _) if scale > Self::max_scale() =>
        return Err(Error::OperandTooLarge { scale, max: Self::max_scale() }),
      (_, Some(lsb)) if lsb < Self::min_scale() =>
        return Err(Error::OperandTooSmall { lsb, min: Self::min_scale() }),
      _ => (),
    }

    // The lowest bit of `frac` is worth 2^(exp - FRAC_WIDTH), i.e. it is that many places from
    // the fixed point, which is `WIDTH` places from the right of the quire.
    let shift = Self::WIDTH as i32 + exp - Value::FRAC_WIDTH as i32;
    let implicit = (frac >> 127) as u64;
    if shift < 0 {
      // Only happens for values near the bottom of the quire; the bits shifted out are zero,
      // as checked against `min_scale` above.
      let frac = frac >> -shift;
      self.accumulate(&[frac as u64, (frac >> 64) as u64], 0, implicit)
    } else {
      let (offset, bit) = (shift as usize / 64, shift as u32 % 64);
      let lo = (frac as u128) << bit;
      let hi = if bit == 0 { implicit } else { (frac >> (128 - bit)) as u64 };
      self.accumulate(&[lo as u64, (lo >> 64) as u64, hi], offset, implicit)
    }
  }

  /// Subtract an exact [`Value`] from `self`; see [`Self::add_value`].
  pub fn sub_value(&mut self, value: Value) -> Result<(), Error> {
    self.add_value(-value)
  }

  /// Add a posit to `self`. This only fails if the quire overflows.
  ///
  /// Standard: "**qAddP**".
  pub fn add_posit<Int: crate::Int>(&mut self, posit: Posit<N, ES, Int>) -> Result<(), Error> {
    self.add_value(Value::from(posit))
  }

  /// Subtract a posit from `self`. This only fails if the quire overflows.
  ///
  /// Standard: "**qSubP**".
  pub fn sub_posit<Int: crate::Int>(&mut self, posit: Posit<N, ES, Int>) -> Result<(), Error> {
    self.add_value(-Value::from(posit))
  }

  /// Add the exact product `a × b` to `self`. This only fails if the quire overflows.
  ///
  /// Standard: "**qMulAdd**".
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q32::ZERO;
  /// quire.add_product(p32::round_from(3), p32::round_from(0.25))?;
  /// quire.sub_product(p32::ONE, p32::round_from(0.5))?;
  /// assert_eq!(p32::round_from(&quire), p32::round_from(0.25));
  /// # Ok::<(), Error>(())
  /// ```
  pub fn add_product<Int: crate::Int>(
    &mut self,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) -> Result<(), Error> {
    self.add_value(quire_mul(a, b))
  }

  /// Subtract the exact product `a × b` from `self`. This only fails if the quire overflows.
  ///
  /// Standard: "**qMulSub**".
  pub fn sub_product<Int: crate::Int>(
    &mut self,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) -> Result<(), Error> {
    self.add_value(-quire_mul(a, b))
  }

  /// Add (or, if `negate`, subtract) another quire to `self`, limb by limb.
  fn accumulate_quire(&mut self, other: &Self, negate: bool) -> Result<(), Error> {
    if self.is_nar() {
      return Ok(())
    }
    if other.is_nar() {
      *self = Self::NAR;
      return Ok(())
    }
    // `a - b` is computed as `a + !b + 1`.
    let flip = if negate { u64::MAX } else { 0 };
    let sign_before = self.sign_bit();
    let sign_other = other.sign_bit() != negate;
    let mut carry = negate;
    for (x, &y) in self.as_u64_array_mut().iter_mut().zip(other.as_u64_array()) {
      let (r, o1) = x.overflowing_add(y ^ flip);
      let (r, o2) = r.overflowing_add(carry as u64);
      *x = r;
      carry = o1 | o2;
    }
    if sign_before == sign_other && self.sign_bit() != sign_before || self.is_nar() {
      log::debug!("quire overflow ({} bits), result is NaR", Self::BITS);
      *self = Self::NAR;
      return Err(Error::QuireOverflow)
    }
    Ok(())
  }

  /// Add another quire to `self`. If either is NaR, the result is NaR. Fails (and sets `self` to
  /// NaR) only if the sum overflows.
  pub fn add_quire(&mut self, other: &Self) -> Result<(), Error> {
    self.accumulate_quire(other, false)
  }

  /// Subtract another quire from `self`; see [`Self::add_quire`].
  pub fn sub_quire(&mut self, other: &Self) -> Result<(), Error> {
    self.accumulate_quire(other, true)
  }
}

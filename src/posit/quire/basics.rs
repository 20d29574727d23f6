use super::*;

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// The quire size in bits.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q16::BITS, 256);
  /// ```
  pub const BITS: u32 = Self::SIZE as u32 * 8;

  /// The quire size in bytes; at least [`Self::MIN_SIZE`], which is checked at compile time.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q16::SIZE, 32);
  /// ```
  pub const SIZE: usize = {
    assert!(SIZE >= Self::MIN_SIZE, "This quire is too small to hold a product of two posits");
    SIZE
  };

  /// The quire with the given two's complement bits, least significant byte first.
  ///
  /// ```
  /// # use posit_quire::*;
  /// let quire = q8::from_le_bytes([0,0,0,0,0,0, 1,0,0,0,0,0, 0,0,0,0]);
  /// assert_eq!(p8::round_from(&quire), p8::ONE);
  /// ```
  pub const fn from_le_bytes(bytes: [u8; SIZE]) -> Self {
    Self(bytes)
  }

  /// The quire with the given two's complement bits, most significant byte first.
  ///
  /// ```
  /// # use posit_quire::*;
  /// let quire = q8::from_be_bytes([0,0,0,0, 0,0,0,0,0,1, 0,0,0,0,0,0]);
  /// assert_eq!(p8::round_from(&quire), p8::ONE);
  /// ```
  pub const fn from_be_bytes(mut bytes: [u8; SIZE]) -> Self {
    bytes.as_mut_slice().reverse();
    Self(bytes)
  }

  /// The two's complement bits of `self`, least significant byte first.
  pub const fn to_le_bytes(self) -> [u8; SIZE] {
    self.0
  }

  /// Number of `u64` limbs.
  pub(crate) const LEN_U64: usize = {
    assert!(SIZE % 8 == 0, "A quire's SIZE must be a multiple of 8 bytes");
    assert!(cfg!(target_endian = "little"), "Quires are only supported on little-endian targets");
    Self::BITS as usize / 64
  };

  /// The quire as little-endian `u64` limbs.
  #[inline(always)]
  pub(crate) const fn as_u64_array(&self) -> &[u64] {
    // SAFETY: the bytes are 8-aligned (`repr(align(8))`) and exactly `LEN_U64` limbs long, on a
    // little-endian target, and any bits make a `u64`.
    unsafe { core::slice::from_raw_parts(self.0.as_ptr().cast::<u64>(), Self::LEN_U64) }
  }

  /// As [`Self::as_u64_array`].
  #[inline(always)]
  pub(crate) const fn as_u64_array_mut(&mut self) -> &mut [u64] {
    // SAFETY: as in `as_u64_array`, and the limbs borrow `self` mutably.
    unsafe { core::slice::from_raw_parts_mut(self.0.as_mut_ptr().cast::<u64>(), Self::LEN_U64) }
  }

  /// `MAX_EXP` of the posits, in the `u32` that sizes are computed in.
  const MAX_EXP: u32 = {
    assert!(ES < 20, "Quires are not supported for ES of 20 or more");
    (N - 2) << ES
  };

  /// The smallest [`SIZE`](Self::SIZE) a quire for `Posit<N, ES, _>` can have: enough bits for
  /// [`Posit::MAX`]² and for [`Posit::MIN_POSITIVE`]², plus a sign bit.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q16::MIN_SIZE, 29);
  /// ```
  pub const MIN_SIZE: usize = (4 * Self::MAX_EXP + 2).div_ceil(8) as usize;

  /// The number of carry bits above the range of a product of two posits: accumulating fewer than
  /// 2 <sup>`CAPACITY`</sup> products can never overflow.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q32::CAPACITY, 31);
  /// ```
  pub const CAPACITY: u32 = Self::BITS - 1 - 2 * Self::WIDTH;

  /// Adding or subtracting fewer than 2 <sup>`SUM_LIMIT`</sup> posits can never overflow. Posits
  /// reach no higher than 2 <sup>`MAX_EXP`</sup>, so there is more room for them than for
  /// products.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q32::SUM_LIMIT, 151);
  /// ```
  pub const SUM_LIMIT: u32 = Self::BITS - (3 * Self::MAX_EXP + 1);

  /// The bit of the quire that stands for 1.0.
  pub(crate) const WIDTH: u32 = {
    let _ = Self::SIZE;
    2 * Self::MAX_EXP
  };

  /// Zero.
  pub const ZERO: Self = Self([0; SIZE]);

  /// NaR: the top bit alone, which would be the most negative number.
  pub const NAR: Self = {
    let mut nar = Self::ZERO;
    nar.0[Self::SIZE - 1] = 0x80;
    nar
  };

  /// The power of two of the lowest bit of the quire: every value accumulated into `self` must be
  /// a multiple of 2 <sup>`min_scale()`</sup>.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q8::min_scale(), 2 * p8::MIN_EXP as i32);
  /// ```
  pub const fn min_scale() -> i32 {
    -(Self::WIDTH as i32)
  }

  /// The largest [scale](crate::Value::scale) of a value that can be accumulated into a quire (of
  /// either sign). Products of two posits stay well below this.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q8::max_scale(), 78);
  /// ```
  pub const fn max_scale() -> i32 {
    (Self::BITS - Self::WIDTH - 2) as i32
  }

  /// Checks whether `self` is NaR.
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert!(q32::NAR.is_nar());
  /// assert!(!q32::ZERO.is_nar());
  /// ```
  pub const fn is_nar(&self) -> bool {
    let Some((top, rest)) = self.as_u64_array().split_last() else { return false };
    // Almost every quire differs in the top limb already.
    *top == 1 << 63 && all_zero(rest)
  }

  /// Checks whether `self` is exactly zero.
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q16::ZERO;
  /// assert!(quire.is_zero());
  /// quire += p16::MIN_POSITIVE;
  /// assert!(!quire.is_zero());
  /// quire -= p16::MIN_POSITIVE;
  /// assert!(quire.is_zero());
  /// ```
  pub const fn is_zero(&self) -> bool {
    all_zero(self.as_u64_array())
  }

  /// The sign bit. Set for negative values and for NaR.
  #[inline]
  pub(crate) const fn sign_bit(&self) -> bool {
    match self.as_u64_array().last() {
      Some(&top) => (top as i64) < 0,
      None => false,
    }
  }
}

const fn all_zero(mut limbs: &[u64]) -> bool {
  while let [first, rest @ ..] = limbs {
    if *first != 0 {
      return false
    }
    limbs = rest
  }
  true
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Default for Quire<N, ES, SIZE> {
  fn default() -> Self {
    Self::ZERO
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> core::fmt::Debug for Quire<N, ES, SIZE> {
  /// The bits in hexadecimal, most significant limb first.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_nar() {
      return f.write_str("Quire(NaR)")
    }
    f.write_str("Quire(0x")?;
    for (i, limb) in self.as_u64_array().iter().rev().enumerate() {
      if i != 0 {
        f.write_str("_")?;
      }
      write!(f, "{limb:016x}")?;
    }
    f.write_str(")")
  }
}


/// Each of these must fail to build: quires smaller than `MIN_SIZE`, or not a whole number of
/// `u64`s.
///
/// ```compile_fail
/// let mut q: posit_quire::Quire<8, 2, 8> = posit_quire::Quire::ZERO;
/// q += posit_quire::p8::ONE;
/// ```
/// ```compile_fail
/// let mut q: posit_quire::Quire<16, 2, 24> = posit_quire::Quire::ZERO;
/// q += posit_quire::p16::ONE;
/// ```
/// ```compile_fail
/// let mut q: posit_quire::Quire<32, 2, 56> = posit_quire::Quire::ZERO;
/// q += posit_quire::p32::ONE;
/// ```
/// ```compile_fail
/// let mut q: posit_quire::Quire<64, 2, 120> = posit_quire::Quire::ZERO;
/// q += posit_quire::p64::ONE;
/// ```
/// ```compile_fail
/// let mut q: posit_quire::Quire<8, 2, 20> = posit_quire::Quire::ZERO;
/// q += posit_quire::p8::ONE;
/// ```
#[cfg(doctest)]
pub struct TooSmall;

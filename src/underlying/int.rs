use super::{Int, Sealed};

/// The same code for every width; `$uint` is the unsigned type of the same width.
macro_rules! impl_sealed {
  ($int:ty, $uint:ty) => {
    impl Int for $int {}

    impl Sealed for $int {
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MIN: Self = <$int>::MIN;
      const MAX: Self = <$int>::MAX;
      const BITS: u32 = <$int>::BITS;

      #[inline]
      fn as_u32(self) -> u32 {
        debug_assert!(u32::try_from(self).is_ok(), "{self} is not a u32");
        self as u32
      }

      #[inline]
      fn of_u32(x: u32) -> Self {
        debug_assert!(Self::try_from(x).is_ok(), "{x} does not fit");
        x as $int
      }

      #[inline]
      fn of_i128(x: i128) -> Self { x as $int }

      #[inline]
      fn is_positive(self) -> bool { self >= 0 }

      #[inline]
      fn abs(self) -> Self { <$int>::abs(self) }

      #[inline]
      fn lshr(self, n: u32) -> Self { ((self as $uint) >> n) as $int }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        self & <$int>::wrapping_sub(1 << n, 1)
      }

      #[inline]
      fn mask_msb(self, n: u32) -> Self {
        self & !<$int>::wrapping_sub(1 << (Self::BITS - n), 1)
      }

      #[inline]
      fn get_lsb(self) -> bool { self & 1 != 0 }

      #[inline]
      unsafe fn leading_zeros_nonzero(self) -> u32 {
        debug_assert!(self != 0);
        self.leading_zeros()
      }

      #[inline]
      unsafe fn leading_run_minus_one(self) -> u32 {
        // Bit `i` of `edges` is set where bits `i` and `i - 1` of `self` differ.
        let edges = self ^ (self << 1);
        debug_assert!(edges != 0, "{self} is a single run");
        edges.leading_zeros()
      }

      #[inline]
      fn not_if_negative(self, control: Self) -> Self {
        self ^ (control >> (Self::BITS - 1))
      }

      #[inline]
      fn not_if_positive(self, control: Self) -> Self {
        self ^ !(control >> (Self::BITS - 1))
      }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { <$int>::wrapping_add(self, other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { <$int>::wrapping_sub(self, other) }

      #[inline]
      fn wrapping_neg(self) -> Self { <$int>::wrapping_neg(self) }

      #[inline]
      fn wrapping_abs(self) -> Self { <$int>::wrapping_abs(self) }

      #[inline]
      fn overflowing_add_shift(self, other: Self) -> (Self, bool) {
        let (sum, carry) = self.overflowing_add(other);
        if carry {
          // The lost top bit is the opposite of the sign of the wrapped sum.
          ((sum >> 1) ^ <$int>::MIN, true)
        } else {
          (sum, false)
        }
      }
    }
  }
}

impl_sealed!{i8, u8}
impl_sealed!{i16, u16}
impl_sealed!{i32, u32}
impl_sealed!{i64, u64}

#[cfg(test)]
#[allow(overflowing_literals)]
mod tests {
  use super::*;

  #[test]
  fn masks() {
    assert_eq!(0b01111110_i8.mask_lsb(3), 0b00000110_i8);
    assert_eq!(0b01111110_i8.mask_msb(3), 0b01100000_i8);
    assert_eq!(0xabcd_i16.mask_lsb(4), 0x000d_i16);
    assert_eq!(0xabcd_i16.mask_msb(4), 0xa000_i16);
    assert_eq!(0xdeadbeefdeadbeef_i64.mask_lsb(6), 0x2f_i64);
    assert_eq!(0xdeadbeefdeadbeef_i64.mask_msb(12), 0xdea_i64 << 52);
    assert_eq!((-1i32).mask_lsb(0), 0);
  }

  #[test]
  fn of_i128_truncates() {
    assert_eq!(<i8 as Sealed>::of_i128(0x1ff), -1i8);
    assert_eq!(<i16 as Sealed>::of_i128(-3), -3i16);
    assert_eq!(<i32 as Sealed>::of_i128(0x1_0000_0005), 5i32);
    assert_eq!(<i64 as Sealed>::of_i128(i64::MIN as i128), i64::MIN);
  }

  /// Checks a property on the same low byte, sign-extended to every width.
  macro_rules! every_width {
    ($byte:expr, |$x:ident, $extra:ident| $check:expr) => {{
      { let $x = $byte as i8; let $extra = 0; $check }
      { let $x = $byte as i8 as i16; let $extra = 8; $check }
      { let $x = $byte as i8 as i32; let $extra = 24; $check }
      { let $x = $byte as i8 as i64; let $extra = 56; $check }
    }};
  }

  #[test]
  fn leading_run_minus_one() {
    every_width!(0b00010101, |x, extra| assert_eq!(unsafe { x.leading_run_minus_one() }, extra + 2));
    every_width!(0b11111000, |x, extra| assert_eq!(unsafe { x.leading_run_minus_one() }, extra + 4));
    every_width!(0b01000000, |x, extra| assert_eq!(unsafe { x.leading_run_minus_one() }, extra));
  }

  #[test]
  fn not_if() {
    every_width!(0b01110110, |x, _extra| {
      assert_eq!(x.not_if_negative(1), x);
      assert_eq!(x.not_if_negative(-1), !x);
      assert_eq!(x.not_if_positive(0), !x);
      assert_eq!(x.not_if_positive(-1), x);
    });
  }

  #[test]
  fn overflowing_add_shift() {
    let cases = [
      (0b01_000000i8, 0b00_100000i8, 0b01_100000i8, false),
      (0b01_000000i8, 0b01_000000i8, 0b01_000000i8, true),
      (0b10_000000i8, 0b01_011000i8, 0b11_011000i8, false),
      (0b10_000000i8, 0b10_011000i8, 0b10_001100i8, true),
      (0b01_111111i8, 0b00_000001i8, 0b01_000000i8, true),
    ];
    for (a, b, sum, overflow) in cases {
      assert_eq!(a.overflowing_add_shift(b), (sum, overflow), "{a:b} + {b:b}");
    }
  }
}

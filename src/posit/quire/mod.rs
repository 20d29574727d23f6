use super::*;

/// A *quire*, for a posit type with `N` bits and `ES` exponent bits, which is `SIZE` bytes long.
///
/// A quire is a fixed-point accumulator wide enough to hold the exact product of any two posits,
/// and the exact sum of a great many of them. Sums and dot products computed in a quire have **no**
/// intermediate rounding whatsoever: the only rounding happens when the result is converted back
/// to a posit with [`RoundFrom`](crate::RoundFrom).
///
/// The `SIZE` is bounded from below by [`Self::MIN_SIZE`], the minimum size necessary to hold the
/// product of two posits (smaller `SIZE`s are a compile-time error), and must be a multiple of 8.
/// Above this, every extra bit doubles the number of terms that can be accumulated without the
/// risk of overflow (see [`Self::CAPACITY`]). [`quire_size`] computes a `SIZE` for a given number
/// of extra bits; the standard quires [`q8`](crate::q8) to [`q64`](crate::q64) have 30.
///
/// # Examples
///
/// ```
/// use posit_quire::{p32, q32, RoundFrom};
///
/// let big = p32::round_from(1e30);
/// let mut quire = q32::ZERO;
/// quire += big;
/// quire += p32::ONE;
/// quire -= big;
/// assert_eq!(p32::round_from(&quire), p32::ONE);  // (1e30 + 1) - 1e30, exactly
/// assert_eq!(p32::ONE + big - big, p32::ZERO);    // the same, rounded at every step
/// ```
///
/// Products are accumulated with [`Self::add_product`], or all at once with the fused dot
/// product [`Self::fdp`].
//
// The quire is a two's complement number stored as an array of bytes in little-endian order,
// aligned to 64 bits so that it can be worked on one `u64` limb at a time. The number 1.0 is
// `1 << WIDTH`, and NaR is the bit pattern `0b1000…0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(align(8))]
pub struct Quire<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> (pub(crate) [u8; SIZE]);

/// The number of bytes of a quire for posits with `n` bits and `es` exponent bits, with at least
/// `capacity` carry bits on top of the range of a product of two posits. The result is a multiple
/// of 8 bytes.
///
/// Accumulating fewer than 2 <sup>`capacity`</sup> products can never overflow the quire.
///
/// ```
/// # use posit_quire::{quire_size, q16};
/// assert_eq!(quire_size(16, 2, 30), 32);
/// assert_eq!(quire_size(16, 2, 31), 32);
/// assert_eq!(quire_size(16, 2, 32), 40);
/// assert_eq!(q16::SIZE, quire_size(16, 2, 30));
/// ```
pub const fn quire_size(n: u32, es: u32, capacity: u32) -> usize {
  let max_exp = (n - 2) << es;
  let bits = 4 * max_exp + 1 + capacity;
  bits.div_ceil(64) as usize * 8
}

/// Basic constants and functions, such as the position of the fixed point, compile-time checks
/// that `SIZE` is ≥ the minimum size, etc.
mod basics;

/// Exact products, and adding exact values into the quire.
mod accumulate;

/// Conversions into and out of the quire.
mod convert;

/// Operators.
mod ops;

/// Fused dot products.
mod fdp;

pub use accumulate::quire_mul;

use super::*;

/// `x as U`, for any [`Int`] `U`, in a `const` context (where trait methods can't be called).
///
/// ```ignore
/// # use posit_quire::underlying::narrow;
/// assert_eq!(narrow::<i8>(0x1ff), -1i8);
/// assert_eq!(narrow::<i32>(-16), -16i32);
/// ```
pub const fn narrow<U: Int>(x: i64) -> U {
  macro_rules! try_narrow {
    ($($t:ty),*) => {$(
      if const { U::BITS == <$t>::BITS } {
        let narrowed = x as $t;
        // SAFETY: `U` is sealed to `i8`, `i16`, `i32` and `i64`, so with this many bits it is `$t`.
        return unsafe { core::mem::transmute_copy::<$t, U>(&narrowed) }
      }
    )*};
  }
  try_narrow!(i8, i16, i32, i64);
  unreachable!()
}

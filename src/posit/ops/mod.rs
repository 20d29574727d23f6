use super::*;

/// `+` and `-`, the latter as `a + (-b)`.
mod add;

/// `×`, as an exact product rounded once.
mod mul;

/// `÷`.
mod div;

/// Implement a binary operator `$trait` (and `$trait_assign`) on posits, by value and by
/// reference, in terms of the inherent method `$name`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    super::mk_ops!{@binary $trait, $name, Posit<N, ES, Int>, Posit<N, ES, Int>, |a, b| a.$name(b)}
    super::mk_ops!{@binary $trait, $name, Posit<N, ES, Int>, &Posit<N, ES, Int>, |a, b| a.$name(*b)}
    super::mk_ops!{@binary $trait, $name, &Posit<N, ES, Int>, Posit<N, ES, Int>, |a, b| (*a).$name(b)}
    super::mk_ops!{@binary $trait, $name, &Posit<N, ES, Int>, &Posit<N, ES, Int>, |a, b| (*a).$name(*b)}

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait_assign<Posit<N, ES, Int>> for Posit<N, ES, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: Posit<N, ES, Int>) { *self = self.$name(rhs) }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait_assign<&Posit<N, ES, Int>> for Posit<N, ES, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Posit<N, ES, Int>) { *self = self.$name(*rhs) }
    }
  };
  (@binary $trait:ident, $name:ident, $lhs:ty, $rhs:ty, |$a:ident, $b:ident| $body:expr) => {
    impl<const N: u32, const ES: u32, Int: crate::Int> $trait<$rhs> for $lhs {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $name(self, rhs: $rhs) -> Self::Output {
        let ($a, $b) = (self, rhs);
        $body
      }
    }
  };
}

pub(crate) use mk_ops;

/// The tests for a binary operator `$op`: every combination of operator forms compiles, and the
/// result is the exact result, correctly rounded, for exhaustive small posits and random big ones.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Posit;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn forms() {
      let mut a = crate::p16::ONE;
      let mut b = crate::p16::MINUS_ONE;
      let _ = (a $op b, &a $op b, a $op &b, &a $op &b);
      a $op_assign b;
      b $op_assign &a;
    }

    /// `a $op b` is the correctly rounded exact result; NaR in, or division by 0, gives NaR.
    fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
      a: Posit<N, ES, Int>,
      b: Posit<N, ES, Int>,
    ) -> bool {
      let posit = a $op b;
      match (Rational::try_from(a), Rational::try_from(b)) {
        (Ok(_), Ok(b)) if stringify!($op) == "/" && b == Rational::from(0) => posit == Posit::NAR,
        (Ok(a), Ok(b)) => super::rational::is_correct_rounded(a $op b, posit),
        _ => posit == Posit::NAR,
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $posit:ty) => {
        #[test]
        fn $name() {
          for a in <$posit>::cases_exhaustive_all() {
            for b in <$posit>::cases_exhaustive_all() {
              assert!(is_correct_rounded(a, b), "{a:?} {} {b:?}", stringify!($op))
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $posit:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(a in <$posit>::cases_proptest_all(), b in <$posit>::cases_proptest_all()) {
            assert!(is_correct_rounded(a, b), "{a:?} {} {b:?}", stringify!($op))
          }
        }
      };
    }

    // Pairs of posits above ~10 bits are too many to go through in a debug build.
    test_exhaustive!{posit_3_0_exhaustive, Posit::<3, 0, i8>}
    test_exhaustive!{posit_4_1_exhaustive, Posit::<4, 1, i8>}
    test_exhaustive!{posit_6_2_exhaustive, Posit::<6, 2, i8>}
    test_exhaustive!{posit_8_0_exhaustive, Posit::<8, 0, i8>}
    test_exhaustive!{posit_10_0_exhaustive, Posit::<10, 0, i16>}
    test_exhaustive!{posit_10_1_exhaustive, Posit::<10, 1, i16>}
    test_exhaustive!{posit_10_3_exhaustive, Posit::<10, 3, i16>}
    test_exhaustive!{p8_exhaustive, crate::p8}

    test_proptest!{posit_20_4_proptest, Posit::<20, 4, i32>}
    test_proptest!{p16_proptest, crate::p16}
    test_proptest!{p32_proptest, crate::p32}
    test_proptest!{p64_proptest, crate::p64}
  }
}

#[cfg(test)]
pub(crate) use mk_tests;

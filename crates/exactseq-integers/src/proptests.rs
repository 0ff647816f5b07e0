//! Property-based tests for narrow arithmetic and the overflow detector.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::small::{checked_add, checked_mul};
    use crate::{would_overflow, ExactNumber, Integer, Rational, SmallRational, Width};

    fn width() -> impl Strategy<Value = Width> {
        prop_oneof![Just(Width::Bits32), Just(Width::Bits64)]
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(i64::MIN + 1..=-1i64), (1i64..=i64::MAX)]
    }

    fn small_ratio() -> impl Strategy<Value = SmallRational> {
        (any::<i32>(), non_zero_int().prop_map(|d| d % 100_000 + if d > 0 { 1 } else { -1 }))
            .prop_map(|(n, d)| {
                SmallRational::new(i64::from(n), d, Width::Bits64).expect("bounded inputs fit")
            })
    }

    proptest! {
        // Narrow results, when produced, are exact.

        #[test]
        fn checked_mul_is_exact_or_overflows(a in any::<i64>(), b in any::<i64>(), w in width()) {
            let exact = Integer::new(a) * Integer::new(b);
            match checked_mul(a, b, w) {
                Some(v) => prop_assert_eq!(Integer::new(v), exact),
                None => prop_assert!(would_overflow(&exact, w)),
            }
        }

        #[test]
        fn checked_add_is_exact_or_overflows(a in any::<i64>(), b in any::<i64>(), w in width()) {
            let exact = Integer::new(a) + Integer::new(b);
            match checked_add(a, b, w) {
                Some(v) => prop_assert_eq!(Integer::new(v), exact),
                None => prop_assert!(would_overflow(&exact, w)),
            }
        }

        #[test]
        fn small_rational_add_agrees_with_wide(a in small_ratio(), b in small_ratio(), w in width()) {
            let exact = Rational::from(a) + Rational::from(b);
            match a.checked_add(b, w) {
                Some(sum) => prop_assert_eq!(Rational::from(sum), exact),
                None => prop_assert!(would_overflow(&exact, w)),
            }
        }

        #[test]
        fn small_rational_mul_agrees_with_wide(a in small_ratio(), b in small_ratio(), w in width()) {
            let exact = Rational::from(a) * Rational::from(b);
            match a.checked_mul(b, w) {
                Some(product) => prop_assert_eq!(Rational::from(product), exact),
                None => prop_assert!(would_overflow(&exact, w)),
            }
        }

        #[test]
        fn small_rational_is_reduced(n in any::<i64>(), d in non_zero_int()) {
            if let Some(r) = SmallRational::new(n, d, Width::Bits64) {
                prop_assert!(r.denominator() > 0);
                let g = Integer::new(r.numerator()).gcd(&Integer::new(r.denominator()));
                prop_assert!(r.numerator() == 0 || g == Integer::new(1));
            }
        }

        #[test]
        fn widening_preserves_value(a in small_ratio()) {
            let narrow = ExactNumber::from(a);
            prop_assert_eq!(narrow.clone().widen(), narrow);
        }
    }
}

//! Property-based tests for the sequence families.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use exactseq_integers::{ExactNumber, Integer, Rational, Width};

    use crate::{
        bernoulli, bernoulli_sequence, factorial, faulhaber_polynomial, faulhaber_sum,
        fibonacci, fibonacci_sequence, generalized_harmonic, normalize_rationals, pascal_next,
        pascal_triangle, Options,
    };

    fn options() -> impl Strategy<Value = Options> {
        (any::<bool>(), prop_oneof![Just(Width::Bits32), Just(Width::Bits64)])
            .prop_map(|(notify, width)| Options { notify, width })
    }

    fn rational() -> impl Strategy<Value = ExactNumber> {
        (any::<i64>(), 1i64..=i64::MAX).prop_map(|(n, d)| ExactNumber::ratio(n, d))
    }

    /// Reference factorial, computed wide from scratch.
    fn wide_factorial(n: i64) -> Integer {
        (1..=n).fold(Integer::new(1), |acc, k| acc * Integer::new(k))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn factorial_satisfies_its_recurrence(n in 1i64..60, opts in options()) {
            let current = factorial(n, &opts).value.to_rational();
            let previous = factorial(n - 1, &opts).value.to_rational();
            prop_assert_eq!(current, previous * Rational::from(n));
        }

        #[test]
        fn factorial_matches_wide_reference(n in 0i64..60, opts in options()) {
            let result = factorial(n, &opts);
            prop_assert_eq!(&result.value, &ExactNumber::BigInt(wide_factorial(n)));
            // A notification exists only if the call promoted and asked for it.
            prop_assert_eq!(result.is_notified(), opts.notify && result.value.is_wide());
        }

        #[test]
        fn negative_factorial_is_zero(n in i64::MIN..0) {
            prop_assert!(factorial(n, &Options::default()).value.is_zero());
        }

        #[test]
        fn bernoulli_term_is_last_of_sequence(n in 0i64..48, opts in options()) {
            let seq = bernoulli_sequence(n, &opts).unwrap();
            let term = bernoulli(n, &opts).unwrap();
            prop_assert_eq!(seq.value.last(), Some(&term.value));
            prop_assert_eq!(seq.value.last().map(ExactNumber::is_wide), Some(term.value.is_wide()));
            prop_assert_eq!(seq.notification, term.notification);
        }

        #[test]
        fn odd_bernoulli_numbers_vanish(k in 1i64..30) {
            prop_assert!(bernoulli(2 * k + 1, &Options::quiet()).unwrap().value.is_zero());
        }

        #[test]
        fn fibonacci_term_is_last_of_sequence(n in 0i64..120, opts in options()) {
            let seq = fibonacci_sequence(n, &opts).unwrap().value;
            prop_assert_eq!(seq.last(), Some(&fibonacci(n, &opts).unwrap().value));
        }

        #[test]
        fn negative_power_harmonic_is_power_sum(n in 0i64..40, p in 1i64..20) {
            let opts = Options::quiet();
            prop_assert_eq!(
                generalized_harmonic(n, -p, &opts).unwrap().value,
                faulhaber_sum(n, p, &opts).unwrap().value
            );
        }

        #[test]
        fn power_sum_is_next_degree_polynomial(n in 0i64..40, p in 0i64..20, opts in options()) {
            prop_assert_eq!(
                faulhaber_sum(n, p, &opts).unwrap().value,
                faulhaber_polynomial(n, p + 1, &opts).unwrap().value
            );
        }

        #[test]
        fn polynomial_difference_is_a_power(n in -30i64..30, p in 1i64..16) {
            // F(n, p+1) - F(n-1, p+1) = n^p
            let opts = Options::quiet();
            let upper = faulhaber_polynomial(n, p + 1, &opts).unwrap().value.to_rational();
            let lower = faulhaber_polynomial(n - 1, p + 1, &opts).unwrap().value.to_rational();
            let power = Integer::new(n).pow(u32::try_from(p).unwrap());
            prop_assert_eq!(upper - lower, Rational::from_integer(power));
        }

        #[test]
        fn harmonic_step_adds_reciprocal_power(n in 1i64..50, p in 1i64..4, opts in options()) {
            let current = generalized_harmonic(n, p, &opts).unwrap().value.to_rational();
            let previous = generalized_harmonic(n - 1, p, &opts).unwrap().value.to_rational();
            let step = Rational::new(Integer::new(1), Integer::new(n).pow(u32::try_from(p).unwrap()));
            prop_assert_eq!(current - previous, step);
        }

        #[test]
        fn width_never_changes_values(n in 0i64..70) {
            let w32 = Options::quiet().with_width(Width::Bits32);
            let w64 = Options::quiet();
            prop_assert_eq!(factorial(n, &w32).value, factorial(n, &w64).value);
            prop_assert_eq!(bernoulli(n, &w32).unwrap().value, bernoulli(n, &w64).unwrap().value);
            prop_assert_eq!(
                pascal_triangle(n, &w32).unwrap().value,
                pascal_triangle(n, &w64).unwrap().value
            );
        }

        #[test]
        fn pascal_next_extends_the_triangle(n in 0i64..80) {
            let opts = Options::quiet();
            let rows = pascal_triangle(n + 1, &opts).unwrap().value;
            let last = usize::try_from(n).unwrap();
            let next = pascal_next(&rows[last], &opts).unwrap().value;
            prop_assert_eq!(&next, &rows[last + 1]);
        }

        #[test]
        fn normalization_reconstructs_input(values in prop::collection::vec(rational(), 0..8), opts in options()) {
            let normalized = normalize_rationals(&values, &opts).unwrap().value;
            let expected: Vec<Rational> = values.iter().map(ExactNumber::to_rational).collect();
            prop_assert_eq!(normalized.reconstruct(), expected);
            prop_assert!(normalized.numerators.iter().all(ExactNumber::is_integer_kind));
            prop_assert!(!normalized.divisor.numerator().is_negative());
        }
    }
}

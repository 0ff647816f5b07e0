//! Factorials.

use exactseq_integers::small::checked_mul;
use exactseq_integers::{ExactNumber, Integer, Width};
use num_traits::One;

use crate::engine::{run, Recurrence};
use crate::error::{require_non_negative, Result};
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

/// `f(0) = 1`, `f(n) = n * f(n - 1)`.
struct Factorial;

impl Recurrence for Factorial {
    type Term = i64;
    const BASE: i64 = 0;

    fn narrow_step(&self, prefix: &[i64], index: i64, width: Width) -> Option<i64> {
        match prefix.last() {
            None => Some(1),
            Some(&previous) => checked_mul(previous, index, width),
        }
    }

    fn wide_step(&self, prefix: &[Integer], index: i64) -> Integer {
        match prefix.last() {
            None => Integer::one(),
            Some(previous) => previous * &Integer::new(index),
        }
    }
}

/// Computes `n!`.
///
/// Negative `n` gives exactly zero. The result is an integer variant, wide
/// once `n!` exceeds the narrow width (from `n = 21` with 64 bits).
#[must_use]
pub fn factorial(n: i64, options: &Options) -> Computed<ExactNumber> {
    let mut policy = PromotionPolicy::new(Operation::Factorial, options);
    if n < 0 {
        return policy.finish(ExactNumber::SmallInt(0));
    }
    let value = run(&Factorial, n, &mut policy)
        .into_last()
        .unwrap_or(ExactNumber::SmallInt(1));
    policy.finish(value)
}

/// Computes `0!, 1!, ..., n_max!`.
///
/// # Errors
///
/// Returns a domain error if `n_max` is negative.
pub fn factorial_sequence(n_max: i64, options: &Options) -> Result<Computed<Vec<ExactNumber>>> {
    require_non_negative(Operation::Factorial, "n_max", n_max)?;
    let mut policy = PromotionPolicy::new(Operation::Factorial, options);
    let terms = run(&Factorial, n_max, &mut policy).into_exact();
    Ok(policy.finish(terms))
}

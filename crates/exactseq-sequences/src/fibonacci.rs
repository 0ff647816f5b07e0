//! Fibonacci numbers.

use exactseq_integers::small::checked_add;
use exactseq_integers::{ExactNumber, Integer, Width};
use num_traits::{One, Zero};

use crate::engine::{run, Recurrence};
use crate::error::{require_non_negative, Result};
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

/// `F_0 = 0`, `F_1 = 1`, `F_n = F_{n-1} + F_{n-2}`.
struct Fibonacci;

impl Recurrence for Fibonacci {
    type Term = i64;
    const BASE: i64 = 0;

    fn narrow_step(&self, prefix: &[i64], _index: i64, width: Width) -> Option<i64> {
        match prefix {
            [] => Some(0),
            [_] => Some(1),
            [.., a, b] => checked_add(*a, *b, width),
        }
    }

    fn wide_step(&self, prefix: &[Integer], _index: i64) -> Integer {
        match prefix {
            [] => Integer::zero(),
            [_] => Integer::one(),
            [.., a, b] => a + b,
        }
    }
}

/// Computes `F_n`. Widens from `n = 93` with a 64-bit width.
///
/// # Errors
///
/// Returns a domain error if `n` is negative.
pub fn fibonacci(n: i64, options: &Options) -> Result<Computed<ExactNumber>> {
    require_non_negative(Operation::Fibonacci, "n", n)?;
    let mut policy = PromotionPolicy::new(Operation::Fibonacci, options);
    let value = run(&Fibonacci, n, &mut policy)
        .into_last()
        .unwrap_or(ExactNumber::SmallInt(0));
    Ok(policy.finish(value))
}

/// Computes `F_0, ..., F_{n_max}`.
///
/// # Errors
///
/// Returns a domain error if `n_max` is negative.
pub fn fibonacci_sequence(n_max: i64, options: &Options) -> Result<Computed<Vec<ExactNumber>>> {
    require_non_negative(Operation::Fibonacci, "n_max", n_max)?;
    let mut policy = PromotionPolicy::new(Operation::Fibonacci, options);
    let terms = run(&Fibonacci, n_max, &mut policy).into_exact();
    Ok(policy.finish(terms))
}

//! Bernoulli numbers.
//!
//! `B_n = -1/(n+1) * sum_{k=0}^{n-1} C(n+1, k) B_k` with `B_0 = 1`, giving
//! `B_1 = -1/2` and `B_{2k+1} = 0` for `k >= 1`.

use exactseq_integers::small::checked_binomial_step;
use exactseq_integers::{ExactNumber, Integer, Rational, SmallRational, Width};
use num_traits::{One, Zero};

use crate::engine::{run, Recurrence, SequenceState};
use crate::error::{require_non_negative, Result, SequenceError};
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

struct Bernoulli;

fn is_trivial_zero(n: i64) -> bool {
    n >= 3 && n % 2 == 1
}

impl Recurrence for Bernoulli {
    type Term = SmallRational;
    const BASE: i64 = 0;

    fn narrow_step(&self, prefix: &[SmallRational], n: i64, width: Width) -> Option<SmallRational> {
        if n == 0 {
            return Some(SmallRational::ONE);
        }
        if is_trivial_zero(n) {
            return Some(SmallRational::ZERO);
        }
        let m = n + 1;
        let mut binomial = 1_i64;
        let mut sum = SmallRational::ZERO;
        for (k, b) in (0_i64..).zip(prefix) {
            sum = sum.checked_add(b.checked_mul_int(binomial, width)?, width)?;
            binomial = checked_binomial_step(binomial, m - k, k + 1, width)?;
        }
        sum.checked_neg(width)?.checked_div_int(m, width)
    }

    fn wide_step(&self, prefix: &[Rational], n: i64) -> Rational {
        if n == 0 {
            return Rational::one();
        }
        if is_trivial_zero(n) {
            return Rational::zero();
        }
        let m = n + 1;
        let mut binomial = Integer::one();
        let mut sum = Rational::zero();
        for (k, b) in (0_i64..).zip(prefix) {
            sum = sum + b * &Rational::from_integer(binomial.clone());
            binomial = binomial * Integer::new(m - k) / Integer::new(k + 1);
        }
        -sum / Rational::from(m)
    }
}

/// Computes the Bernoulli number `B_n` (with `B_1 = -1/2`).
///
/// # Errors
///
/// Returns a domain error if `n` is negative.
pub fn bernoulli(n: i64, options: &Options) -> Result<Computed<ExactNumber>> {
    require_non_negative(Operation::Bernoulli, "n", n)?;
    let mut policy = PromotionPolicy::new(Operation::Bernoulli, options);
    let value = run(&Bernoulli, n, &mut policy)
        .into_last()
        .unwrap_or(ExactNumber::SmallRatio(SmallRational::ONE));
    Ok(policy.finish(value))
}

/// Computes `B_0, ..., B_{n_max}`; `n_max` is an index, not a length.
///
/// # Errors
///
/// Returns a domain error if `n_max` is negative.
pub fn bernoulli_sequence(n_max: i64, options: &Options) -> Result<Computed<Vec<ExactNumber>>> {
    require_non_negative(Operation::Bernoulli, "n_max", n_max)?;
    let mut policy = PromotionPolicy::new(Operation::Bernoulli, options);
    let terms = run(&Bernoulli, n_max, &mut policy).into_exact();
    Ok(policy.finish(terms))
}

/// `B_0, ..., B_{last_index}` with the Faulhaber convention `B_1 = +1/2`.
///
/// The recurrence itself always runs with `B_1 = -1/2`; only the returned
/// term is flipped.
pub(crate) fn plus_convention(
    last_index: i64,
    policy: &mut PromotionPolicy,
) -> Result<SequenceState<SmallRational>> {
    let width = policy.width();
    let mut state = run(&Bernoulli, last_index, policy);
    match &mut state {
        SequenceState::Narrow(terms) => {
            if let Some(b1) = terms.get_mut(1) {
                *b1 = b1.checked_neg(width).ok_or_else(|| {
                    SequenceError::internal(policy.operation(), "B_1 is not representable")
                })?;
            }
        }
        SequenceState::Wide(terms) => {
            if let Some(b1) = terms.get_mut(1) {
                *b1 = -std::mem::take(b1);
            }
        }
    }
    Ok(state)
}

//! Faulhaber polynomials and sums of powers.
//!
//! The coefficient vector of the degree-`p` polynomial is
//!
//! ```text
//! c_0 = 0,   c_j = (1/p) * C(p, p-j) * B_{p-j}   (j = 1..p)
//! ```
//!
//! where the Bernoulli numbers use `B_1 = +1/2`. Evaluating it at `n` gives
//! `F(n, p)`, and `sum_{k=1}^n k^p = F(n, p + 1)`.

use std::iter;

use exactseq_integers::small::checked_binomial_step;
use exactseq_integers::{ExactNumber, Integer, Rational, SmallRational, Width};
use num_traits::{One, Zero};

use crate::bernoulli;
use crate::engine::SequenceState;
use crate::error::{exponent, require_non_negative, require_positive, Result, SequenceError};
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

fn narrow_coefficients(bernoulli: &[SmallRational], p: i64, width: Width) -> Option<Vec<SmallRational>> {
    let mut by_index = Vec::with_capacity(bernoulli.len());
    let mut binomial = 1_i64;
    for (i, b) in (0_i64..).zip(bernoulli) {
        by_index.push(b.checked_mul_int(binomial, width)?.checked_div_int(p, width)?);
        binomial = checked_binomial_step(binomial, p - i, i + 1, width)?;
    }
    // c_j pairs with B_{p-j}
    Some(iter::once(SmallRational::ZERO).chain(by_index.into_iter().rev()).collect())
}

fn wide_coefficients(bernoulli: &[Rational], p: i64) -> Vec<Rational> {
    let mut by_index = Vec::with_capacity(bernoulli.len());
    let mut binomial = Integer::one();
    let degree = Rational::from(p);
    for (i, b) in (0_i64..).zip(bernoulli) {
        by_index.push(b * &Rational::from_integer(binomial.clone()) / degree.clone());
        binomial = binomial * Integer::new(p - i) / Integer::new(i + 1);
    }
    iter::once(Rational::zero()).chain(by_index.into_iter().rev()).collect()
}

/// Coefficients `c_0..c_p` of the degree-`p` polynomial; `p >= 1`.
pub(crate) fn coefficients(p: i64, policy: &mut PromotionPolicy) -> Result<SequenceState<SmallRational>> {
    let width = policy.width();
    let state = bernoulli::plus_convention(p - 1, policy)?;
    if let SequenceState::Narrow(terms) = &state {
        if let Some(c) = narrow_coefficients(terms, p, width) {
            return Ok(SequenceState::Narrow(c));
        }
    }
    let wide = policy.maybe_promote(state, true, p).into_wide();
    Ok(SequenceState::Wide(wide_coefficients(&wide, p)))
}

fn horner_narrow(coefficients: &[SmallRational], n: i64, width: Width) -> Option<SmallRational> {
    coefficients.iter().rev().try_fold(SmallRational::ZERO, |acc, c| {
        acc.checked_mul_int(n, width)?.checked_add(*c, width)
    })
}

fn horner_wide(coefficients: &[Rational], n: i64) -> Rational {
    let x = Rational::from(n);
    coefficients
        .iter()
        .rev()
        .fold(Rational::zero(), |acc, c| acc * &x + c)
}

/// Evaluates the polynomial at `n`, widening the coefficients if needed.
///
/// The value of a Faulhaber polynomial at an integer is an integer; anything
/// else is reported as an internal error.
pub(crate) fn evaluate(
    coefficients: &mut SequenceState<SmallRational>,
    n: i64,
    policy: &mut PromotionPolicy,
) -> Result<ExactNumber> {
    if let SequenceState::Narrow(c) = coefficients {
        if let Some(value) = horner_narrow(c, n, policy.width()) {
            if value.is_integer() {
                return Ok(ExactNumber::SmallInt(value.numerator()));
            }
            return Err(non_integral(policy.operation(), n, &value.to_string()));
        }
    }

    let state = std::mem::replace(coefficients, SequenceState::Narrow(Vec::new()));
    let wide = policy.maybe_promote(state, true, n).into_wide();
    let value = horner_wide(&wide, n);
    *coefficients = SequenceState::Wide(wide);
    match value.to_integer() {
        Some(integer) => Ok(ExactNumber::BigInt(integer)),
        None => Err(non_integral(policy.operation(), n, &value.to_string())),
    }
}

fn non_integral(operation: Operation, n: i64, value: &str) -> SequenceError {
    SequenceError::internal(
        operation,
        format!("Faulhaber polynomial at {n} evaluated to non-integer {value}"),
    )
}

/// `sum_{k=1}^n k^p` under an existing policy; `n, p >= 0`.
pub(crate) fn power_sum(n: i64, p: i64, policy: &mut PromotionPolicy) -> Result<ExactNumber> {
    let degree = successor(policy.operation(), p)?;
    let mut c = coefficients(degree, policy)?;
    evaluate(&mut c, n, policy)
}

/// `sum_{k=1}^m k^p` for `m = 1..=n_max` under an existing policy.
pub(crate) fn power_sum_sequence(
    n_max: i64,
    p: i64,
    policy: &mut PromotionPolicy,
) -> Result<Vec<ExactNumber>> {
    let degree = successor(policy.operation(), p)?;
    let mut c = coefficients(degree, policy)?;
    let mut terms: Vec<ExactNumber> = (1..=n_max)
        .map(|m| evaluate(&mut c, m, policy))
        .collect::<Result<_>>()?;
    // Once the coefficients widened, earlier terms are re-expressed as well.
    if c.is_wide() {
        terms = terms.into_iter().map(ExactNumber::widen).collect();
    }
    Ok(terms)
}

fn successor(operation: Operation, p: i64) -> Result<i64> {
    p.checked_add(1).ok_or(SequenceError::Domain {
        operation,
        argument: "p",
        value: p,
        expected: "must be < i64::MAX",
    })
}

/// Returns the coefficient vector `c_0..c_p` of the degree-`p` polynomial.
///
/// # Errors
///
/// Returns a domain error if `p < 1` or `p` exceeds `u32::MAX`.
pub fn faulhaber_coefficients(p: i64, options: &Options) -> Result<Computed<Vec<ExactNumber>>> {
    require_positive(Operation::FaulhaberCoefficients, "p", p)?;
    exponent(Operation::FaulhaberCoefficients, "p", p)?;
    let mut policy = PromotionPolicy::new(Operation::FaulhaberCoefficients, options);
    let c = coefficients(p, &mut policy)?.into_exact();
    Ok(policy.finish(c))
}

/// Evaluates the degree-`p` Faulhaber polynomial `F(n, p)`.
///
/// Any integer `n` is accepted; the result is always an integer.
///
/// # Errors
///
/// Returns a domain error if `p < 1` or `p` exceeds `u32::MAX`.
pub fn faulhaber_polynomial(n: i64, p: i64, options: &Options) -> Result<Computed<ExactNumber>> {
    require_positive(Operation::FaulhaberPolynomial, "p", p)?;
    exponent(Operation::FaulhaberPolynomial, "p", p)?;
    let mut policy = PromotionPolicy::new(Operation::FaulhaberPolynomial, options);
    let mut c = coefficients(p, &mut policy)?;
    let value = evaluate(&mut c, n, &mut policy)?;
    Ok(policy.finish(value))
}

/// Computes `1^p + 2^p + ... + n^p` as `F(n, p + 1)`.
///
/// # Errors
///
/// Returns a domain error if `n` or `p` is negative, or `p` exceeds
/// `u32::MAX`.
pub fn faulhaber_sum(n: i64, p: i64, options: &Options) -> Result<Computed<ExactNumber>> {
    require_non_negative(Operation::FaulhaberSum, "n", n)?;
    exponent(Operation::FaulhaberSum, "p", p)?;
    let mut policy = PromotionPolicy::new(Operation::FaulhaberSum, options);
    let value = power_sum(n, p, &mut policy)?;
    Ok(policy.finish(value))
}

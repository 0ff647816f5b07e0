//! Harmonic numbers.
//!
//! `H(n, p) = sum_{k=1}^n 1/k^p` for `p >= 1`. For `p <= 0` the value is
//! defined through the Faulhaber sum: `H(n, -q) = sum_{k=1}^n k^q`.

use exactseq_integers::small::checked_pow;
use exactseq_integers::{ExactNumber, Integer, Rational, SmallRational, Width};
use num_traits::{One, Zero};

use crate::engine::{run, Recurrence};
use crate::error::{exponent, require_non_negative, Result, SequenceError};
use crate::faulhaber;
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

struct Harmonic {
    power: u32,
}

impl Recurrence for Harmonic {
    type Term = SmallRational;
    const BASE: i64 = 1;

    fn narrow_step(&self, prefix: &[SmallRational], k: i64, width: Width) -> Option<SmallRational> {
        let reciprocal = SmallRational::new(1, checked_pow(k, self.power, width)?, width)?;
        prefix
            .last()
            .copied()
            .unwrap_or(SmallRational::ZERO)
            .checked_add(reciprocal, width)
    }

    fn wide_step(&self, prefix: &[Rational], k: i64) -> Rational {
        let reciprocal = Rational::new(Integer::one(), Integer::new(k).pow(self.power));
        prefix.last().cloned().unwrap_or_else(Rational::zero) + reciprocal
    }
}

/// Negated power for the Faulhaber branch; `-p` must fit a `u32`.
fn faulhaber_power(p: i64) -> Result<i64> {
    p.checked_neg()
        .filter(|q| u32::try_from(*q).is_ok())
        .ok_or(SequenceError::Domain {
            operation: Operation::Harmonic,
            argument: "p",
            value: p,
            expected: "must be >= -u32::MAX",
        })
}

/// Computes the harmonic number `H_n = 1 + 1/2 + ... + 1/n`.
///
/// `H_0 = 0`. The result widens from `n = 47` with a 64-bit width.
///
/// # Errors
///
/// Returns a domain error if `n` is negative.
pub fn harmonic(n: i64, options: &Options) -> Result<Computed<ExactNumber>> {
    generalized_harmonic(n, 1, options)
}

/// Computes `H(n, p)`.
///
/// For `p >= 1` this is a rational; for `p <= 0` it is the integer
/// `faulhaber_sum(n, -p)`.
///
/// # Errors
///
/// Returns a domain error if `n` is negative or `p` exceeds `u32::MAX`.
pub fn generalized_harmonic(n: i64, p: i64, options: &Options) -> Result<Computed<ExactNumber>> {
    require_non_negative(Operation::Harmonic, "n", n)?;
    let mut policy = PromotionPolicy::new(Operation::Harmonic, options);
    let value = if p <= 0 {
        faulhaber::power_sum(n, faulhaber_power(p)?, &mut policy)?
    } else {
        let power = exponent(Operation::Harmonic, "p", p)?;
        run(&Harmonic { power }, n, &mut policy)
            .into_last()
            .unwrap_or(ExactNumber::SmallRatio(SmallRational::ZERO))
    };
    Ok(policy.finish(value))
}

/// Computes `H_1, ..., H_{n_max}`.
///
/// # Errors
///
/// Returns a domain error if `n_max` is negative.
pub fn harmonic_sequence(n_max: i64, options: &Options) -> Result<Computed<Vec<ExactNumber>>> {
    generalized_harmonic_sequence(n_max, 1, options)
}

/// Computes `H(1, p), ..., H(n_max, p)`.
///
/// # Errors
///
/// Returns a domain error if `n_max` is negative or `p` exceeds `u32::MAX`.
pub fn generalized_harmonic_sequence(
    n_max: i64,
    p: i64,
    options: &Options,
) -> Result<Computed<Vec<ExactNumber>>> {
    require_non_negative(Operation::Harmonic, "n_max", n_max)?;
    let mut policy = PromotionPolicy::new(Operation::Harmonic, options);
    let terms = if p <= 0 {
        faulhaber::power_sum_sequence(n_max, faulhaber_power(p)?, &mut policy)?
    } else {
        let power = exponent(Operation::Harmonic, "p", p)?;
        run(&Harmonic { power }, n_max, &mut policy).into_exact()
    };
    Ok(policy.finish(terms))
}

//! Common-denominator normalization of rational collections.
//!
//! For values `v_0..v_k` the divisor is the least common multiple `d` of
//! their denominators, and `v_i = numerators[i] / d` with every numerator an
//! integer. The empty collection normalizes to `([], 1)`.

use exactseq_integers::small::{checked_lcm, checked_mul};
use exactseq_integers::{ExactNumber, Integer, Rational, Representable, Width};
use num_traits::One;

use crate::error::{Result, SequenceError};
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

/// Integer numerators over one shared positive divisor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonDivisor {
    /// `numerators[i] / divisor` is the `i`-th input.
    pub numerators: Vec<ExactNumber>,
    /// The least common denominator of the inputs.
    pub divisor: ExactNumber,
}

impl CommonDivisor {
    /// Rebuilds the rationals `numerators[i] / divisor`.
    #[must_use]
    pub fn reconstruct(&self) -> Vec<Rational> {
        let divisor = self.divisor.numerator();
        self.numerators
            .iter()
            .map(|n| Rational::new(n.numerator(), divisor.clone()))
            .collect()
    }
}

fn narrow_parts(value: &ExactNumber, width: Width) -> Option<(i64, i64)> {
    let (num, den) = match value {
        ExactNumber::SmallInt(n) => (*n, 1),
        ExactNumber::SmallRatio(r) => (r.numerator(), r.denominator()),
        wide => (wide.numerator().to_i64()?, wide.denominator().to_i64()?),
    };
    (num.fits(width) && den.fits(width)).then_some((num, den))
}

/// Normalizes in the narrow width, or returns the position that overflowed.
fn normalize_narrow(values: &[ExactNumber], width: Width) -> std::result::Result<(Vec<i64>, i64), usize> {
    let parts = values
        .iter()
        .enumerate()
        .map(|(i, v)| narrow_parts(v, width).ok_or(i))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut divisor = 1_i64;
    for (i, &(_, den)) in parts.iter().enumerate() {
        divisor = checked_lcm(divisor, den, width).ok_or(i)?;
    }

    let numerators = parts
        .iter()
        .enumerate()
        .map(|(i, &(num, den))| checked_mul(num, divisor / den, width).ok_or(i))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((numerators, divisor))
}

fn normalize_wide(values: &[ExactNumber], operation: Operation) -> Result<(Vec<Integer>, Integer)> {
    let divisor = values
        .iter()
        .fold(Integer::one(), |acc, v| acc.lcm(&v.denominator()));

    let numerators = values
        .iter()
        .enumerate()
        .map(|(position, v)| {
            let den = v.denominator();
            if !divisor.is_multiple_of(&den) {
                return Err(SequenceError::internal(
                    operation,
                    format!("divisor {divisor} is not a multiple of denominator {den} at {position}"),
                ));
            }
            Ok(v.numerator() * (&divisor / &den))
        })
        .collect::<Result<_>>()?;
    Ok((numerators, divisor))
}

fn normalize(values: &[ExactNumber], policy: &mut PromotionPolicy) -> Result<CommonDivisor> {
    match normalize_narrow(values, policy.width()) {
        Ok((numerators, divisor)) => Ok(CommonDivisor {
            numerators: numerators.into_iter().map(ExactNumber::SmallInt).collect(),
            divisor: ExactNumber::SmallInt(divisor),
        }),
        Err(position) => {
            policy.record_wide_input(i64::try_from(position).unwrap_or(i64::MAX));
            let (numerators, divisor) = normalize_wide(values, policy.operation())?;
            Ok(CommonDivisor {
                numerators: numerators.into_iter().map(ExactNumber::BigInt).collect(),
                divisor: ExactNumber::BigInt(divisor),
            })
        }
    }
}

/// Expresses `values` over their least common denominator.
///
/// The event index of a promotion is the position of the first value whose
/// narrow normalization overflowed.
///
/// # Errors
///
/// Returns an internal error if a numerator fails to come out integral.
pub fn normalize_rationals(values: &[ExactNumber], options: &Options) -> Result<Computed<CommonDivisor>> {
    let mut policy = PromotionPolicy::new(Operation::NormalizeRationals, options);
    let normalized = normalize(values, &mut policy)?;
    Ok(policy.finish(normalized))
}

/// Returns only the least common denominator of `values`; `1` when empty.
///
/// # Errors
///
/// See [`normalize_rationals`].
pub fn common_divisor(values: &[ExactNumber], options: &Options) -> Result<Computed<ExactNumber>> {
    Ok(normalize_rationals(values, options)?.map(|n| n.divisor))
}

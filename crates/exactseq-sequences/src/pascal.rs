//! Rows of Pascal's triangle.

use exactseq_integers::small::checked_add;
use exactseq_integers::{ExactNumber, Integer, Representable, Width};

use crate::engine::{run, Recurrence, SequenceState};
use crate::error::{require_non_negative, Result, SequenceError};
use crate::options::Options;
use crate::promotion::{Computed, Operation, PromotionPolicy};

/// Row `n` of the triangle; row 0 is `[1]`.
struct Pascal;

fn next_narrow(row: &[i64], width: Width) -> Option<Vec<i64>> {
    let mut next = Vec::with_capacity(row.len() + 1);
    next.extend(row.first().copied());
    for pair in row.windows(2) {
        next.push(checked_add(pair[0], pair[1], width)?);
    }
    next.extend(row.last().copied());
    Some(next)
}

fn next_wide(row: &[Integer]) -> Vec<Integer> {
    let mut next = Vec::with_capacity(row.len() + 1);
    next.extend(row.first().cloned());
    next.extend(row.windows(2).map(|pair| &pair[0] + &pair[1]));
    next.extend(row.last().cloned());
    next
}

impl Recurrence for Pascal {
    type Term = Vec<i64>;
    const BASE: i64 = 0;

    fn narrow_step(&self, prefix: &[Vec<i64>], _index: i64, width: Width) -> Option<Vec<i64>> {
        match prefix.last() {
            None => Some(vec![1]),
            Some(row) => next_narrow(row, width),
        }
    }

    fn wide_step(&self, prefix: &[Vec<Integer>], _index: i64) -> Vec<Integer> {
        match prefix.last() {
            None => vec![Integer::new(1)],
            Some(row) => next_wide(row),
        }
    }
}

fn rows_into_exact(state: SequenceState<Vec<i64>>) -> Vec<Vec<ExactNumber>> {
    match state {
        SequenceState::Narrow(rows) => rows
            .into_iter()
            .map(|row| row.into_iter().map(ExactNumber::SmallInt).collect())
            .collect(),
        SequenceState::Wide(rows) => rows
            .into_iter()
            .map(|row| row.into_iter().map(ExactNumber::BigInt).collect())
            .collect(),
    }
}

/// Returns rows `0..=n_max` of Pascal's triangle.
///
/// Rows widen together once any binomial coefficient exceeds the narrow
/// width (row 67 with 64 bits).
///
/// # Errors
///
/// Returns a domain error if `n_max` is negative.
pub fn pascal_triangle(n_max: i64, options: &Options) -> Result<Computed<Vec<Vec<ExactNumber>>>> {
    require_non_negative(Operation::PascalTriangle, "n_max", n_max)?;
    let mut policy = PromotionPolicy::new(Operation::PascalTriangle, options);
    let rows = rows_into_exact(run(&Pascal, n_max, &mut policy));
    Ok(policy.finish(rows))
}

/// Returns the row following `row`: each entry is the sum of the two above.
///
/// # Errors
///
/// Returns a domain error for an empty row and `NotIntegral` if an entry is
/// not an integer.
pub fn pascal_next(row: &[ExactNumber], options: &Options) -> Result<Computed<Vec<ExactNumber>>> {
    let operation = Operation::PascalNext;
    if row.is_empty() {
        return Err(SequenceError::Domain {
            operation,
            argument: "row.len()",
            value: 0,
            expected: "must be >= 1",
        });
    }
    let mut policy = PromotionPolicy::new(operation, options);
    let width = policy.width();
    let index = i64::try_from(row.len()).unwrap_or(i64::MAX);

    let entries = row
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            entry
                .to_integer()
                .ok_or(SequenceError::NotIntegral { operation, position })
        })
        .collect::<Result<Vec<Integer>>>()?;

    let narrow: Option<Vec<i64>> = entries
        .iter()
        .map(|e| e.to_i64().filter(|v| v.fits(width)))
        .collect();
    if let Some(next) = narrow.as_deref().and_then(|r| next_narrow(r, width)) {
        return Ok(policy.finish(next.into_iter().map(ExactNumber::SmallInt).collect()));
    }

    let wide = match narrow {
        Some(values) => policy.maybe_promote(SequenceState::Narrow(values), true, index).into_wide(),
        None => {
            policy.record_wide_input(index);
            entries
        }
    };
    let next = next_wide(&wide);
    Ok(policy.finish(next.into_iter().map(ExactNumber::BigInt).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(row: &[i64]) -> Vec<ExactNumber> {
        row.iter().copied().map(ExactNumber::SmallInt).collect()
    }

    #[test]
    fn test_first_rows() {
        let rows = pascal_triangle(5, &Options::default()).unwrap().value;
        let expected = vec![
            small(&[1]),
            small(&[1, 1]),
            small(&[1, 2, 1]),
            small(&[1, 3, 3, 1]),
            small(&[1, 4, 6, 4, 1]),
            small(&[1, 5, 10, 10, 5, 1]),
        ];
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_row_sixty_seven_promotes() {
        let sixty_six = pascal_triangle(66, &Options::default()).unwrap();
        assert!(!sixty_six.is_notified());

        let sixty_seven = pascal_triangle(67, &Options::default()).unwrap();
        let event = sixty_seven.notification.expect("promotion reported");
        assert_eq!(event.index, 67);
        let central: Integer = "14226520737620288370".parse().unwrap();
        assert_eq!(sixty_seven.value[67][33], ExactNumber::BigInt(central));
        assert!(sixty_seven.value[0][0].is_wide());
    }

    #[test]
    fn test_next_row() {
        let next = pascal_next(&small(&[1, 4, 6, 4, 1]), &Options::default()).unwrap();
        assert_eq!(next.value, small(&[1, 5, 10, 10, 5, 1]));
        assert!(!next.is_notified());

        let single = pascal_next(&small(&[1]), &Options::default()).unwrap().value;
        assert_eq!(single, small(&[1, 1]));
    }

    #[test]
    fn test_next_row_promotes() {
        let row = small(&[1, i64::MAX, 1]);
        let next = pascal_next(&row, &Options::default()).unwrap();
        let event = next.notification.as_ref().expect("promotion reported");
        assert_eq!(event.operation, Operation::PascalNext);
        assert!(event.to_string().starts_with("pascal_next converted"));
        assert!(next.value.iter().all(ExactNumber::is_wide));
        assert_eq!(next.value[1], ExactNumber::BigInt(Integer::new(i64::MAX) + Integer::new(1)));
    }

    #[test]
    fn test_next_row_of_wide_input() {
        let big: Integer = "100000000000000000000".parse().unwrap();
        let row = vec![ExactNumber::SmallInt(1), ExactNumber::BigInt(big.clone())];
        let next = pascal_next(&row, &Options::default()).unwrap();
        assert_eq!(next.notification.map(|e| e.index), Some(2));
        assert_eq!(next.value[1], ExactNumber::BigInt(big.clone() + Integer::new(1)));
        assert_eq!(next.value[2], ExactNumber::BigInt(big));
    }

    #[test]
    fn test_next_row_rejects_bad_input() {
        let opts = Options::default();
        let empty = pascal_next(&[], &opts).unwrap_err();
        assert!(matches!(
            empty,
            SequenceError::Domain {
                operation: Operation::PascalNext,
                ..
            }
        ));
        let err = pascal_next(&[ExactNumber::SmallInt(1), ExactNumber::ratio(1, 2)], &opts).unwrap_err();
        assert_eq!(
            err,
            SequenceError::NotIntegral {
                operation: Operation::PascalNext,
                position: 1
            }
        );
    }
}

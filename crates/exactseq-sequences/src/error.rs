//! Errors reported by sequence operations.
//!
//! Overflow is not an error: it is resolved by promotion. What remains is a
//! bad argument or a broken internal invariant.

use thiserror::Error;

use crate::promotion::Operation;

/// Errors that can occur while computing a sequence value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// An argument lies outside the domain of the operation.
    #[error("{operation}: argument `{argument}` = {value} is outside the domain ({expected})")]
    Domain {
        /// The operation that rejected the argument.
        operation: Operation,
        /// Name of the argument.
        argument: &'static str,
        /// The rejected value.
        value: i64,
        /// Description of the accepted domain.
        expected: &'static str,
    },

    /// An input that must be an integer was a proper rational.
    #[error("{operation}: entry {position} is not an integer")]
    NotIntegral {
        /// The operation that rejected the input.
        operation: Operation,
        /// Position of the offending entry.
        position: usize,
    },

    /// A computation produced a value that violates its own postcondition.
    #[error("{operation}: internal invariant violated: {detail}")]
    Internal {
        /// The operation that failed.
        operation: Operation,
        /// What went wrong.
        detail: String,
    },
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

impl SequenceError {
    pub(crate) fn internal(operation: Operation, detail: impl Into<String>) -> Self {
        SequenceError::Internal {
            operation,
            detail: detail.into(),
        }
    }
}

pub(crate) fn require_non_negative(
    operation: Operation,
    argument: &'static str,
    value: i64,
) -> Result<()> {
    if value < 0 {
        return Err(SequenceError::Domain {
            operation,
            argument,
            value,
            expected: "must be >= 0",
        });
    }
    Ok(())
}

pub(crate) fn require_positive(operation: Operation, argument: &'static str, value: i64) -> Result<()> {
    if value < 1 {
        return Err(SequenceError::Domain {
            operation,
            argument,
            value,
            expected: "must be >= 1",
        });
    }
    Ok(())
}

/// Converts an exponent argument, which must fit a `u32`.
pub(crate) fn exponent(operation: Operation, argument: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| SequenceError::Domain {
        operation,
        argument,
        value,
        expected: "must be in 0..=u32::MAX",
    })
}

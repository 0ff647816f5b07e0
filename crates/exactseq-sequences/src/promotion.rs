//! The promotion policy.
//!
//! A call owns exactly one [`PromotionPolicy`]. When the narrow computation
//! of that call would overflow, the policy widens the carried state and
//! records a single [`PromotionEvent`], which is handed back to the caller in
//! [`Computed::notification`]. Nothing is shared between calls.

use std::fmt;

use exactseq_integers::{Repr, Widen, Width};
use tracing::{debug, warn};

use crate::engine::SequenceState;
use crate::options::Options;

/// The public operation a computation was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `n!`
    Factorial,
    /// Bernoulli numbers.
    Bernoulli,
    /// Harmonic numbers.
    Harmonic,
    /// Faulhaber coefficient vectors.
    FaulhaberCoefficients,
    /// Faulhaber polynomial evaluation.
    FaulhaberPolynomial,
    /// Sums of powers.
    FaulhaberSum,
    /// Fibonacci numbers.
    Fibonacci,
    /// Pascal rows.
    PascalTriangle,
    /// The row after a given Pascal row.
    PascalNext,
    /// Common-divisor normalization.
    NormalizeRationals,
}

impl Operation {
    /// Name used in notifications and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Factorial => "factorial",
            Operation::Bernoulli => "bernoulli",
            Operation::Harmonic => "harmonic",
            Operation::FaulhaberCoefficients => "faulhaber_coefficients",
            Operation::FaulhaberPolynomial => "faulhaber_polynomial",
            Operation::FaulhaberSum => "faulhaber_sum",
            Operation::Fibonacci => "fibonacci",
            Operation::PascalTriangle => "pascal_triangle",
            Operation::PascalNext => "pascal_next",
            Operation::NormalizeRationals => "normalize_rationals",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a computation leaving the narrow representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromotionEvent {
    /// The operation the caller invoked.
    pub operation: Operation,
    /// The index or argument whose value did not fit.
    pub index: i64,
    /// The narrow width that was exceeded.
    pub narrow: Width,
    /// The representation the computation continued in.
    pub resulting: Repr,
}

impl fmt::Display for PromotionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted to {} representation at index {} (exceeded {})",
            self.operation, self.resulting, self.index, self.narrow
        )
    }
}

/// A value together with the promotion notification of the call that made it.
#[derive(Clone, Debug, PartialEq)]
pub struct Computed<T> {
    /// The computed value.
    pub value: T,
    /// Present once if the call promoted and notification was requested.
    pub notification: Option<PromotionEvent>,
}

impl<T> Computed<T> {
    /// Returns true if a promotion was reported.
    pub fn is_notified(&self) -> bool {
        self.notification.is_some()
    }

    /// Maps the value, keeping the notification.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Computed<U> {
        Computed {
            value: f(self.value),
            notification: self.notification,
        }
    }
}

/// Call-scoped promotion state.
#[derive(Debug)]
pub struct PromotionPolicy {
    operation: Operation,
    options: Options,
    promoted: bool,
    notification: Option<PromotionEvent>,
}

impl PromotionPolicy {
    /// Creates the policy for one call of `operation`.
    #[must_use]
    pub fn new(operation: Operation, options: &Options) -> Self {
        Self {
            operation,
            options: *options,
            promoted: false,
            notification: None,
        }
    }

    /// The operation this policy reports for.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The narrow width of this call.
    #[must_use]
    pub fn width(&self) -> Width {
        self.options.width
    }

    /// Returns true once any state of this call has been widened.
    #[must_use]
    pub fn has_promoted(&self) -> bool {
        self.promoted
    }

    /// Widens `state` if `would_overflow` is set and it is still narrow.
    ///
    /// Calling this on a wide state, or without overflow, returns the state
    /// unchanged. At most one event is recorded per policy.
    pub fn maybe_promote<N: Widen>(
        &mut self,
        state: SequenceState<N>,
        would_overflow: bool,
        index: i64,
    ) -> SequenceState<N> {
        if !would_overflow || state.is_wide() {
            return state;
        }
        self.record(index);
        state.widen()
    }

    /// Records a promotion caused by an input that does not fit the narrow
    /// width to begin with.
    pub fn record_wide_input(&mut self, index: i64) {
        self.record(index);
    }

    fn record(&mut self, index: i64) {
        if self.promoted {
            return;
        }
        self.promoted = true;
        let event = PromotionEvent {
            operation: self.operation,
            index,
            narrow: self.options.width,
            resulting: Repr::Wide,
        };
        if self.options.notify {
            warn!(operation = %self.operation, index, narrow = %self.options.width, "{event}");
            self.notification = Some(event);
        } else {
            debug!(operation = %self.operation, index, "silent promotion to wide representation");
        }
    }

    /// Ends the call, attaching the notification (if any) to `value`.
    pub fn finish<T>(self, value: T) -> Computed<T> {
        Computed {
            value,
            notification: self.notification,
        }
    }
}

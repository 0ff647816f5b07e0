//! # exactseq-sequences
//!
//! Exact integer and rational sequences with integer-overflow protection.
//!
//! Every family is computed in the narrow width first. When a step would
//! overflow, the call's [`PromotionPolicy`] re-expresses everything computed
//! so far in the wide representation and the recurrence continues there.
//!
//! - Factorials: [`factorial`], [`factorial_sequence`]
//! - Bernoulli numbers (`B_1 = -1/2`): [`bernoulli`], [`bernoulli_sequence`]
//! - Harmonic numbers `H(n, p)`: [`harmonic`], [`generalized_harmonic`]
//! - Faulhaber polynomials (`B_1 = +1/2`): [`faulhaber_coefficients`],
//!   [`faulhaber_polynomial`], [`faulhaber_sum`]
//! - Fibonacci numbers and Pascal rows
//! - Common-denominator normalization: [`normalize_rationals`]
//!
//! ## Notification
//!
//! A promotion is reported at most once per call, as the `notification` of
//! the returned [`Computed`] value, and mirrored as a `tracing` warning. With
//! `Options::quiet()` the value is the same and no event is returned.
//!
//! ```rust
//! use exactseq_sequences::{factorial, Options};
//!
//! let result = factorial(21, &Options::default());
//! assert_eq!(result.value.to_string(), "51090942171709440000");
//! assert_eq!(result.notification.map(|e| e.index), Some(21));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bernoulli;
pub mod engine;
pub mod error;
pub mod factorial;
pub mod faulhaber;
pub mod fibonacci;
pub mod harmonic;
pub mod normalize;
pub mod options;
pub mod pascal;
pub mod promotion;

#[cfg(test)]
mod proptests;

pub use bernoulli::{bernoulli, bernoulli_sequence};
pub use engine::{run, Recurrence, SequenceState};
pub use error::{Result, SequenceError};
pub use factorial::{factorial, factorial_sequence};
pub use faulhaber::{faulhaber_coefficients, faulhaber_polynomial, faulhaber_sum};
pub use fibonacci::{fibonacci, fibonacci_sequence};
pub use harmonic::{generalized_harmonic, generalized_harmonic_sequence, harmonic, harmonic_sequence};
pub use normalize::{common_divisor, normalize_rationals, CommonDivisor};
pub use options::Options;
pub use pascal::{pascal_next, pascal_triangle};
pub use promotion::{Computed, Operation, PromotionEvent, PromotionPolicy};

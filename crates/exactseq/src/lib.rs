//! # exactseq
//!
//! Exact factorials, Bernoulli, harmonic and Faulhaber sequences that never
//! overflow.
//!
//! Each computation starts in a narrow fixed-width representation and is
//! promoted to arbitrary precision the moment a value would no longer fit.
//! The caller learns about the promotion once per call, through the returned
//! value rather than a global side channel.
//!
//! ## Features
//!
//! - **Narrow first**: checked `i64` arithmetic bounded by a selectable width
//! - **Lossless promotion**: all terms computed so far are re-expressed wide
//! - **Exact results**: reduced integers and rationals, never floats
//! - **Faulhaber machinery**: coefficient vectors, evaluation, power sums
//!
//! ## Quick Start
//!
//! ```rust
//! use exactseq::prelude::*;
//!
//! let opts = Options::default();
//! let b = bernoulli(36, &opts).unwrap();
//! assert!(b.value.is_wide());
//! assert_eq!(b.notification.map(|e| e.index), Some(36));
//!
//! let sum = faulhaber_sum(10, 2, &opts).unwrap().value;
//! assert_eq!(sum, ExactNumber::SmallInt(385));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exactseq_integers as integers;
pub use exactseq_sequences as sequences;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exactseq_integers::{ExactNumber, Integer, Rational, Repr, Width};
    pub use exactseq_sequences::{
        bernoulli, bernoulli_sequence, common_divisor, factorial, factorial_sequence,
        faulhaber_coefficients, faulhaber_polynomial, faulhaber_sum, fibonacci,
        fibonacci_sequence, generalized_harmonic, generalized_harmonic_sequence, harmonic,
        harmonic_sequence, normalize_rationals, pascal_next, pascal_triangle, CommonDivisor,
        Computed, Options, PromotionEvent, SequenceError,
    };
}

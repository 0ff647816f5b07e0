//! # exactseq-integers
//!
//! Exact numbers in two widths for the exactseq sequence engines.
//!
//! This crate provides:
//! - Arbitrary precision integers and rationals (`Integer`, `Rational`),
//!   wrapping `dashu`
//! - Narrow rationals with checked arithmetic (`SmallRational`)
//! - The overflow detector (`Width`, `Representable`, `would_overflow`)
//! - The tagged result value (`ExactNumber`)
//!
//! ## Narrow and wide
//!
//! Narrow values live in an `i64` and stay inside the bounds of a `Width`.
//! Checked operations compute exactly in `i128` and report `None` when the
//! reduced result leaves the width; callers then continue in the wide
//! representation, which never overflows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod exact;
pub mod integer;
pub mod rational;
pub mod small;
pub mod width;

#[cfg(test)]
mod proptests;

pub use exact::ExactNumber;
pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};
pub use small::SmallRational;
pub use width::{would_overflow, Repr, Representable, Widen, Width};

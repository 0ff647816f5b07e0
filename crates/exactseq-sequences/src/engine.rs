//! The generic recurrence engine.
//!
//! Every sequence family describes one step of its recurrence twice: once in
//! the narrow representation, where a step may report overflow, and once in
//! the wide representation, where it cannot. [`run`] drives the steps from
//! the family's base index, asks the narrow step first, and on overflow hands
//! the whole prefix to the [`PromotionPolicy`] before redoing that step wide.
//! Once wide, the remaining steps stay wide.
//!
//! A single term is always the last element of the sequence run up to its
//! index, so `term(n)` and `sequence(n)[last]` cannot disagree.

use exactseq_integers::{ExactNumber, Widen, Width};
use tracing::trace;

use crate::promotion::PromotionPolicy;

/// The wide counterpart of a narrow term type.
pub type Wide<T> = <T as Widen>::Wide;

/// The computed prefix of a sequence, in its current representation.
pub enum SequenceState<N: Widen> {
    /// All terms are narrow.
    Narrow(Vec<N>),
    /// All terms are wide.
    Wide(Vec<Wide<N>>),
}

impl<N: Widen> SequenceState<N> {
    /// Returns true if the state has been widened.
    #[must_use]
    pub fn is_wide(&self) -> bool {
        matches!(self, SequenceState::Wide(_))
    }

    /// Number of terms computed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SequenceState::Narrow(terms) => terms.len(),
            SequenceState::Wide(terms) => terms.len(),
        }
    }

    /// Returns true if no term has been computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-expresses every term in the wide representation.
    #[must_use]
    pub fn widen(self) -> Self {
        SequenceState::Wide(self.into_wide())
    }

    /// Returns the terms in the wide representation.
    #[must_use]
    pub fn into_wide(self) -> Vec<Wide<N>> {
        match self {
            SequenceState::Narrow(terms) => terms.widen(),
            SequenceState::Wide(terms) => terms,
        }
    }
}

impl<N> SequenceState<N>
where
    N: Widen + Into<ExactNumber>,
    Wide<N>: Into<ExactNumber>,
{
    /// Converts every term into an [`ExactNumber`].
    #[must_use]
    pub fn into_exact(self) -> Vec<ExactNumber> {
        match self {
            SequenceState::Narrow(terms) => terms.into_iter().map(Into::into).collect(),
            SequenceState::Wide(terms) => terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Converts the last term into an [`ExactNumber`].
    #[must_use]
    pub fn into_last(self) -> Option<ExactNumber> {
        match self {
            SequenceState::Narrow(mut terms) => terms.pop().map(Into::into),
            SequenceState::Wide(mut terms) => terms.pop().map(Into::into),
        }
    }
}

/// One step of a recurrence, in both representations.
pub trait Recurrence {
    /// The narrow term type.
    type Term: Widen;

    /// Index of the first term.
    const BASE: i64;

    /// Computes the term at `index` from the narrow prefix.
    ///
    /// Returns `None` if the exact term, or any intermediate value needed to
    /// compute it, does not fit `width`.
    fn narrow_step(&self, prefix: &[Self::Term], index: i64, width: Width) -> Option<Self::Term>;

    /// Computes the term at `index` from the wide prefix.
    fn wide_step(&self, prefix: &[Wide<Self::Term>], index: i64) -> Wide<Self::Term>;
}

/// Runs `recurrence` from its base index through `last_index` inclusive.
///
/// Returns an empty narrow state if `last_index` precedes the base index.
pub fn run<R: Recurrence>(
    recurrence: &R,
    last_index: i64,
    policy: &mut PromotionPolicy,
) -> SequenceState<R::Term> {
    let width = policy.width();
    let mut state = SequenceState::Narrow(Vec::new());
    trace!(operation = %policy.operation(), last_index, "running recurrence");

    for index in R::BASE..=last_index {
        let would_overflow = match &mut state {
            SequenceState::Narrow(terms) => match recurrence.narrow_step(terms, index, width) {
                Some(term) => {
                    terms.push(term);
                    continue;
                }
                None => true,
            },
            SequenceState::Wide(_) => false,
        };

        state = policy.maybe_promote(state, would_overflow, index);
        if let SequenceState::Wide(terms) = &mut state {
            let term = recurrence.wide_step(terms, index);
            terms.push(term);
        }
    }

    state
}

//! Core trait for pairwise alignment strategies.
//!
//! The batch engine and the command-line driver only see strategies through
//! [`PairwiseAligner`]. Each strategy keeps its own gap symbol and its own
//! tie-breaking rules; nothing here tries to reconcile them.

use crate::error::AlignResult;

/// A pairwise alignment strategy.
///
/// Implementations must be pure: the output depends only on the two input
/// sequences, so one instance can serve any number of threads at once.
pub trait PairwiseAligner {
    /// What one alignment produces (a padded query, a pair of rows, ...).
    type Output;

    /// The gap symbol this strategy inserts.
    fn gap(&self) -> u8;

    /// Align `query` against `standard`.
    ///
    /// Fails only on inputs outside the strategy's length preconditions, or
    /// on an internal inconsistency.
    fn align_pair(&self, standard: &[u8], query: &[u8]) -> AlignResult<Self::Output>;
}

impl<A: PairwiseAligner + ?Sized> PairwiseAligner for &A {
    type Output = A::Output;

    fn gap(&self) -> u8 {
        (**self).gap()
    }

    fn align_pair(&self, standard: &[u8], query: &[u8]) -> AlignResult<Self::Output> {
        (**self).align_pair(standard, query)
    }
}

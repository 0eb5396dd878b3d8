//! Error type shared by every alignment operation.

use std::fmt;

use thiserror::Error;

/// Which argument of a pairwise operation violated a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("a"),
            Operand::B => f.write_str("b"),
        }
    }
}

/// Failure of a single alignment request.
///
/// Neither variant is recoverable by retrying: every algorithm in this crate
/// is pure, so the same inputs always fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// An input sequence length fell outside `[min, max]`.
    #[error("length of {which} must be between {min} and {max} (actual={len})")]
    Precondition {
        which: Operand,
        len: usize,
        min: usize,
        max: usize,
    },

    /// The traceback reached a cell with no valid predecessor.
    #[error("traceback stuck at cell ({row}, {col}): table is inconsistent with its sequences")]
    InternalConsistency { row: usize, col: usize },
}

impl AlignError {
    pub fn precondition(which: Operand, len: usize, min: usize, max: usize) -> Self {
        Self::Precondition {
            which,
            len,
            min,
            max,
        }
    }

    pub fn internal_consistency(row: usize, col: usize) -> Self {
        Self::InternalConsistency { row, col }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }
}

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

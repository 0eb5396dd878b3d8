//! Assorted helpers shared by the aligners.

use crate::error::{AlignError, AlignResult, Operand};

/// Upper bound on the length of any input sequence.
pub const MAX_SEQUENCE_LENGTH: usize = 150;

/// Check that `seq` has a length in `[min, MAX_SEQUENCE_LENGTH]`.
#[inline]
pub fn check_length(which: Operand, seq: &[u8], min: usize) -> AlignResult<()> {
    let len = seq.len();
    if len < min || len > MAX_SEQUENCE_LENGTH {
        return Err(AlignError::precondition(
            which,
            len,
            min,
            MAX_SEQUENCE_LENGTH,
        ));
    }
    Ok(())
}

/// Check both operands of a pairwise call, `a` first.
#[inline]
pub fn check_pair(a: &[u8], b: &[u8], min: usize) -> AlignResult<()> {
    check_length(Operand::A, a, min)?;
    check_length(Operand::B, b, min)
}

/// Copy of `seq` with every `gap` byte removed.
pub fn strip_gaps(seq: &[u8], gap: u8) -> Vec<u8> {
    seq.iter().copied().filter(|&c| c != gap).collect()
}

//! Longest common contiguous substring.
//!
//! Classic O(|a|·|b|) dynamic program: cell (i, j) holds the length of the
//! common run ending at `a[j-1]` / `b[i-1]`, and drops to zero on mismatch.
//! Only two rows of the table are kept live at a time.

use log::trace;

use crate::error::AlignResult;
use crate::matches::Match;
use crate::utils::check_pair;

/// Find the longest run of bytes shared contiguously by `a` and `b`.
///
/// If several runs share the maximal length, the first one met in a
/// row-major scan (earliest end in `b`, then earliest end in `a`) wins.
/// Returns [`Match::NONE`] when either input is empty or no byte is shared.
///
/// # Errors
/// [`AlignError::Precondition`](crate::AlignError::Precondition) when either
/// length exceeds [`MAX_SEQUENCE_LENGTH`](crate::MAX_SEQUENCE_LENGTH).
///
/// ```
/// use dna_align::find_longest_match;
///
/// let m = find_longest_match(b"AAGTTT", b"AGTTTA").unwrap();
/// assert_eq!(m.as_tuple(), (5, 1, 0));
/// ```
pub fn find_longest_match(a: &[u8], b: &[u8]) -> AlignResult<Match> {
    check_pair(a, b, 0)?;

    let n = a.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    let mut best = Match::NONE;

    for (i, &cb) in b.iter().enumerate() {
        for (j, &ca) in a.iter().enumerate() {
            let run = if ca == cb { prev[j] + 1 } else { 0 };
            // Strict: ties keep the earlier run.
            if run > best.len {
                best = Match::new(run, j + 1 - run, i + 1 - run);
            }
            curr[j + 1] = run;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    trace!(
        "longest match len={} pos_a={} pos_b={} (|a|={}, |b|={})",
        best.len,
        best.pos_a,
        best.pos_b,
        a.len(),
        b.len()
    );
    Ok(best)
}

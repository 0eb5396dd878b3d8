//! Longest Common Subsequence (LCS) table and traceback.
//!
//! The table is the full `(|b|+1) × (|a|+1)` grid: rows walk `b`, columns walk
//! `a`, and cell (i, j) is the LCS length of `a[..j]` and `b[..i]`.
//! [`reconstruct`] walks it back from the bottom-right corner into two
//! equal-length rows padded with [`LCS_GAP`].

use log::debug;

use crate::error::{AlignError, AlignResult};
use crate::traits::PairwiseAligner;
use crate::utils::check_pair;

/// Gap symbol emitted by the LCS aligner.
pub const LCS_GAP: u8 = b'_';

/// Dense LCS length table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<Vec<u32>>,
}

impl LcsTable {
    /// Wrap pre-computed rows. No consistency check is made here;
    /// [`reconstruct`] reports any mismatch when it walks the table.
    pub fn from_rows(cells: Vec<Vec<u32>>) -> Self {
        Self { cells }
    }

    /// Number of rows, `|b| + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns in the first row, `|a| + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// LCS length of the full inputs (bottom-right cell).
    pub fn score(&self) -> u32 {
        self.cells
            .last()
            .and_then(|r| r.last())
            .copied()
            .unwrap_or(0)
    }

    pub fn as_rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// True if every row has exactly `cols` cells and there are `rows` rows.
    fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows() == rows && self.cells.iter().all(|r| r.len() == cols)
    }
}

/// Build the LCS table of `a` and `b`.
///
/// # Errors
/// [`AlignError::Precondition`] when either input is empty or longer than
/// [`MAX_SEQUENCE_LENGTH`](crate::MAX_SEQUENCE_LENGTH).
pub fn build_lcs_table(a: &[u8], b: &[u8]) -> AlignResult<LcsTable> {
    check_pair(a, b, 1)?;

    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[j - 1] == b[i - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i][j - 1].max(dp[i - 1][j])
            };
        }
    }

    debug!("lcs table {}x{} built, score={}", m + 1, n + 1, dp[m][n]);
    Ok(LcsTable::from_rows(dp))
}

/// A global alignment of two sequences: equal-length rows over the input
/// alphabet plus [`LCS_GAP`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsAlignment {
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
}

impl LcsAlignment {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Columns where both rows carry the same (non-gap) byte.
    pub fn matches(&self) -> usize {
        self.aligned_a
            .iter()
            .zip(&self.aligned_b)
            .filter(|(x, y)| x == y && **x != LCS_GAP)
            .count()
    }
}

/// Trace `table` back from `(|b|, |a|)` to `(0, 0)`.
///
/// At each cell the first applicable move wins:
/// 1. equal bytes: emit both, step diagonally;
/// 2. left neighbour holds the same value: emit `a[j-1]` over a gap;
/// 3. upper neighbour holds the same value: emit a gap over `b[i-1]`.
///
/// # Errors
/// [`AlignError::InternalConsistency`] if no move applies, or if the table
/// shape does not match the inputs. Neither can happen for a table built by
/// [`build_lcs_table`] from the same `a` and `b`.
pub fn reconstruct(a: &[u8], b: &[u8], table: &LcsTable) -> AlignResult<LcsAlignment> {
    let mut i = b.len();
    let mut j = a.len();
    if !table.has_shape(i + 1, j + 1) {
        return Err(AlignError::internal_consistency(
            table.rows().min(i + 1),
            table.cols().min(j + 1),
        ));
    }
    let t = table.as_rows();

    let mut rev_a = Vec::with_capacity(a.len() + b.len());
    let mut rev_b = Vec::with_capacity(a.len() + b.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[j - 1] == b[i - 1] {
            rev_a.push(a[j - 1]);
            rev_b.push(b[i - 1]);
            i -= 1;
            j -= 1;
        } else if j > 0 && t[i][j - 1] == t[i][j] {
            rev_a.push(a[j - 1]);
            rev_b.push(LCS_GAP);
            j -= 1;
        } else if i > 0 && t[i - 1][j] == t[i][j] {
            rev_a.push(LCS_GAP);
            rev_b.push(b[i - 1]);
            i -= 1;
        } else {
            return Err(AlignError::internal_consistency(i, j));
        }
    }

    rev_a.reverse();
    rev_b.reverse();
    Ok(LcsAlignment {
        aligned_a: rev_a,
        aligned_b: rev_b,
    })
}

/// Build the table for `a`/`b` and trace it back in one call.
///
/// ```
/// use dna_align::lcs_align;
///
/// let aln = lcs_align(b"A", b"GA").unwrap();
/// assert_eq!(aln.aligned_a, b"_A");
/// assert_eq!(aln.aligned_b, b"GA");
/// ```
pub fn lcs_align(a: &[u8], b: &[u8]) -> AlignResult<LcsAlignment> {
    let table = build_lcs_table(a, b)?;
    reconstruct(a, b, &table)
}

/// [`PairwiseAligner`] wrapper around [`lcs_align`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsAligner;

impl PairwiseAligner for LcsAligner {
    type Output = LcsAlignment;

    fn gap(&self) -> u8 {
        LCS_GAP
    }

    fn align_pair(&self, standard: &[u8], query: &[u8]) -> AlignResult<Self::Output> {
        lcs_align(standard, query)
    }
}

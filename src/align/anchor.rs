//! Anchor-based alignment of a query against a standard.
//!
//! The longest contiguous match between the two sequences is the anchor.
//! The regions left and right of it are searched again, and whichever of the
//! primary anchor and the right-hand secondary match is longer decides where
//! `-` padding goes so that matched regions sit at the same offset as in the
//! standard.
//!
//! This is a heuristic, not an optimal alignment: only one level of secondary
//! matches is examined, and the left-hand one only takes part in the length
//! comparison.

use log::debug;

use crate::align::lccs::find_longest_match;
use crate::error::AlignResult;
use crate::traits::PairwiseAligner;

/// Gap symbol emitted by the anchor-based aligner.
pub const ANCHOR_GAP: u8 = b'-';

/// Align `query` to `standard`, returning the query padded with
/// [`ANCHOR_GAP`].
///
/// The output always contains `query` as a subsequence, so it is never
/// shorter than `query`. When the two share no byte, `query` is returned
/// unchanged.
///
/// ```
/// use dna_align::align;
///
/// assert_eq!(align(b"AAGTTT", b"AATTTC").unwrap(), b"AA-TTTC");
/// ```
pub fn align(standard: &[u8], query: &[u8]) -> AlignResult<Vec<u8>> {
    let anchor = find_longest_match(standard, query)?;
    if anchor.is_empty() {
        debug!("no anchor between standard and query; leaving query as is");
        return Ok(query.to_vec());
    }

    let left = find_longest_match(&standard[..anchor.pos_a], &query[..anchor.pos_b])?;
    let right = find_longest_match(&standard[anchor.end_a()..], &query[anchor.end_b()..])?;

    // (outer_a, outer_b) places the first padding block, (inner_a, inner_b)
    // the second. Both are absolute offsets into standard / query.
    let (outer_a, outer_b, inner_a, inner_b) = if left.len < right.len {
        debug!(
            "re-anchoring on right match len={} (left len={})",
            right.len, left.len
        );
        (
            anchor.pos_a,
            anchor.pos_b,
            anchor.end_a() + right.pos_a,
            anchor.end_b() + right.pos_b,
        )
    } else {
        (left.pos_a, left.pos_b, anchor.pos_a, anchor.pos_b)
    };

    let lead = outer_a.saturating_sub(outer_b);
    let inner_shift = inner_a as isize - inner_b as isize - lead as isize;
    let trail = inner_shift.max(0) as usize;

    debug!(
        "anchor len={} at ({}, {}); padding {} + {}",
        anchor.len, anchor.pos_a, anchor.pos_b, lead, trail
    );

    let mut out = Vec::with_capacity(query.len() + lead + trail);
    out.extend_from_slice(&query[..outer_b]);
    out.resize(out.len() + lead, ANCHOR_GAP);
    out.extend_from_slice(&query[outer_b..inner_b]);
    out.resize(out.len() + trail, ANCHOR_GAP);
    out.extend_from_slice(&query[inner_b..]);
    Ok(out)
}

/// [`PairwiseAligner`] wrapper around [`align`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorAligner;

impl PairwiseAligner for AnchorAligner {
    type Output = Vec<u8>;

    fn gap(&self) -> u8 {
        ANCHOR_GAP
    }

    fn align_pair(&self, standard: &[u8], query: &[u8]) -> AlignResult<Self::Output> {
        align(standard, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::strip_gaps;

    fn al(standard: &str, query: &str) -> String {
        String::from_utf8(align(standard.as_bytes(), query.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn pads_before_shifted_anchor() {
        assert_eq!(al("AAGTTT", "AATTTC"), "AA-TTTC");
        assert_eq!(al("AAGTTT", "AGTTTA"), "-AGTTTA");
        assert_eq!(al("GA", "A"), "-A");
        assert_eq!(al("AAAGGG", "GA"), "---GA");
    }

    #[test]
    fn right_match_drives_padding() {
        assert_eq!(al("AAACGGG", "AG"), "A---G");
        assert_eq!(al("GAATTCAGTTA", "GGATCGA"), "GGA-TCGA");
    }

    #[test]
    fn unchanged_when_already_aligned_or_disjoint() {
        assert_eq!(al("AAGTTT", "AACTTT"), "AACTTT");
        assert_eq!(al("A", "G"), "G");
        assert_eq!(al("", "ACGT"), "ACGT");
        assert_eq!(al("ACGT", ""), "");
    }

    #[test]
    fn padding_only_adds_gaps() {
        let q = b"GACTAGGAGTACACCC";
        let out = align(b"GATCACTAGCAGCAGT", q).unwrap();
        assert_eq!(out, b"G---ACTAGG---AGTACACCC".to_vec());
        assert_eq!(strip_gaps(&out, ANCHOR_GAP), q.to_vec());
    }

    #[test]
    fn trait_delegates_to_align() {
        let aligner = AnchorAligner;
        assert_eq!(aligner.gap(), b'-');
        assert_eq!(
            aligner.align_pair(b"GATCACTATTTTTTTT", b"TTTTTTTTGATCACTA").unwrap(),
            b"--------TTTTTTTTGATCACTA".to_vec()
        );
    }
}

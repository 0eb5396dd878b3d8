//! Short-sequence alignment against a reference.
//!
//! This crate provides two independent alignment strategies for nucleotide
//! strings of at most [`MAX_SEQUENCE_LENGTH`] bytes:
//!
//! 1. **Anchor-based** ([`align`]): find the longest contiguous match between
//!    a standard and a query, then pad the query with `-` so that the matched
//!    region sits at the same offset as in the standard.
//! 2. **LCS-based** ([`build_lcs_table`] + [`reconstruct`]): a full
//!    longest-common-subsequence table, traced back into two equal-length
//!    rows padded with `_`.
//!
//! The strategies use different gap symbols and different tie-breaks, and
//! produce different output for the same pair. They are kept apart on
//! purpose.
//!
//! ## Quick start
//! ```
//! use dna_align::{align, find_longest_match, lcs_align};
//!
//! assert_eq!(find_longest_match(b"AAGTTT", b"AGTTTA").unwrap().as_tuple(), (5, 1, 0));
//! assert_eq!(align(b"AAGTTT", b"AATTTC").unwrap(), b"AA-TTTC");
//!
//! let aln = lcs_align(b"A", b"GA").unwrap();
//! assert_eq!((aln.aligned_a.as_slice(), aln.aligned_b.as_slice()), (&b"_A"[..], &b"GA"[..]));
//! ```
//!
//! Every call is pure and allocates its own table, so calls can run on any
//! number of threads. [`BatchAligner`] aligns many queries against one
//! standard, in parallel when the `parallel` feature is enabled.

pub mod align;
pub mod builder;
pub mod engine;
pub mod error;
pub mod matches;
pub mod selfcheck;
pub mod traits;
pub mod utils;

pub use crate::align::anchor::{align, AnchorAligner, ANCHOR_GAP};
pub use crate::align::lccs::find_longest_match;
pub use crate::align::lcs::{
    build_lcs_table, lcs_align, reconstruct, LcsAligner, LcsAlignment, LcsTable, LCS_GAP,
};
pub use crate::builder::BatchAlignerBuilder;
pub use crate::engine::BatchAligner;
pub use crate::error::{AlignError, AlignResult, Operand};
pub use crate::matches::Match;
pub use crate::traits::PairwiseAligner;
pub use crate::utils::MAX_SEQUENCE_LENGTH;

#![cfg(feature = "heavy")]
mod common;

use common::random_dna;
use dna_align::{align, lcs_align, utils::strip_gaps, ANCHOR_GAP, LCS_GAP, MAX_SEQUENCE_LENGTH};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_stress_max_length_pairs() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..2_000 {
        let s = random_dna(&mut rng, MAX_SEQUENCE_LENGTH);
        let len = rng.gen_range(1..=MAX_SEQUENCE_LENGTH);
        let q = random_dna(&mut rng, len);

        let padded = align(&s, &q).unwrap();
        assert_eq!(strip_gaps(&padded, ANCHOR_GAP), q);

        let aln = lcs_align(&s, &q).unwrap();
        assert_eq!(aln.aligned_a.len(), aln.aligned_b.len());
        assert_eq!(strip_gaps(&aln.aligned_a, LCS_GAP), s);
    }
}

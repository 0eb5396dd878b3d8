//! Example: both alignment strategies on the same pair.
//!
//! Run with:
//! `cargo run --example align`

use dna_align::{align, find_longest_match, lcs_align};

fn main() {
    let standard = b"GATCACTAGCAGCAGT";
    let query = b"GACTAGGAGTACACCC";

    let anchor = find_longest_match(standard, query).expect("inputs within bounds");
    println!(
        "Longest match: len={} at standard[{}] / query[{}]",
        anchor.len, anchor.pos_a, anchor.pos_b
    );

    let padded = align(standard, query).expect("inputs within bounds");
    println!("Anchor alignment:");
    println!("  {}", String::from_utf8_lossy(standard));
    println!("  {}", String::from_utf8_lossy(&padded));

    let aln = lcs_align(standard, query).expect("inputs within bounds");
    println!("LCS alignment ({} matching columns):", aln.matches());
    println!("  {}", String::from_utf8_lossy(&aln.aligned_a));
    println!("  {}", String::from_utf8_lossy(&aln.aligned_b));
}

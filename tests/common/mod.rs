//! Input generators shared by the stress test and the benches.

use rand::{rngs::StdRng, Rng};

/// Uniform random `len`-base sequence over `ACGT`.
pub fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

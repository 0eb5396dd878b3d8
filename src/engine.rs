//! Batch driver: align many queries against one standard.
//!
//! Every query is an independent request. Results come back in input order,
//! and one query failing its preconditions never affects the others.
//!
//! With the `parallel` feature, batches of at least
//! [`BatchAligner::parallel_threshold`] queries are spread over the rayon
//! thread pool. With the `tracing` feature, each batch and each query run
//! inside a trace span.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::AlignResult;
use crate::traits::PairwiseAligner;

/// Default minimum batch size before the parallel path is taken.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Aligns queries against a fixed standard with a given strategy.
///
/// ```
/// use dna_align::{align::anchor::AnchorAligner, BatchAligner};
///
/// let batch = BatchAligner::new(AnchorAligner, b"AAGTTT".to_vec()).unwrap();
/// let out = batch.align_all(&[b"AATTTC".as_slice(), b"AGTTTA".as_slice()]);
/// assert_eq!(out[0].as_deref().unwrap(), b"AA-TTTC");
/// assert_eq!(out[1].as_deref().unwrap(), b"-AGTTTA");
/// ```
#[derive(Debug, Clone)]
pub struct BatchAligner<A: PairwiseAligner> {
    aligner: A,
    standard: Vec<u8>,
    parallel_threshold: usize,
}

impl<A: PairwiseAligner> BatchAligner<A> {
    /// Create a batch aligner with the default parallel threshold.
    ///
    /// Fails if `standard` is longer than
    /// [`MAX_SEQUENCE_LENGTH`](crate::MAX_SEQUENCE_LENGTH).
    pub fn new(aligner: A, standard: Vec<u8>) -> AlignResult<Self> {
        crate::builder::BatchAlignerBuilder::new(aligner, standard).build()
    }

    pub(crate) fn from_parts(aligner: A, standard: Vec<u8>, parallel_threshold: usize) -> Self {
        Self {
            aligner,
            standard,
            parallel_threshold,
        }
    }

    pub fn aligner(&self) -> &A {
        &self.aligner
    }

    pub fn standard(&self) -> &[u8] {
        &self.standard
    }

    /// Minimum batch size for the parallel path.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Align a single query against the standard.
    pub fn align_one(&self, query: &[u8]) -> AlignResult<A::Output> {
        #[cfg(feature = "tracing")]
        let _enter = tracing::trace_span!("align_query", len = query.len()).entered();
        self.aligner.align_pair(&self.standard, query)
    }

    /// Align every query, preserving input order.
    pub fn align_all<Q>(&self, queries: &[Q]) -> Vec<AlignResult<A::Output>>
    where
        Q: AsRef<[u8]> + Sync,
        A: Sync,
        A::Output: Send,
    {
        #[cfg(feature = "tracing")]
        let _enter = tracing::trace_span!("align_batch", queries = queries.len()).entered();

        #[cfg(feature = "parallel")]
        {
            if queries.len() >= self.parallel_threshold {
                debug!("aligning {} queries in parallel", queries.len());
                return queries
                    .par_iter()
                    .map(|q| self.align_one(q.as_ref()))
                    .collect();
            }
        }

        debug!("aligning {} queries sequentially", queries.len());
        queries.iter().map(|q| self.align_one(q.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::anchor::{align, AnchorAligner};
    use crate::align::lcs::LcsAligner;
    use crate::builder::BatchAlignerBuilder;
    use crate::error::AlignError;

    #[test]
    fn results_follow_input_order() {
        let batch = BatchAligner::new(AnchorAligner, b"GATCACTATTTTTTTT".to_vec()).unwrap();
        let queries = ["TTTTTTTTGATCACTA", "GTTTTTTTGATCACTA", "NNN", "CCC"];
        let out = batch.align_all(&queries);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].as_deref().unwrap(), b"--------TTTTTTTTGATCACTA");
        assert_eq!(out[1].as_deref().unwrap(), b"GTTTTTTTGATCACTA");
        assert_eq!(out[2].as_deref().unwrap(), b"NNN");
        assert_eq!(out[3].as_deref().unwrap(), b"---C-CC");
    }

    #[test]
    fn failing_query_is_isolated() {
        let batch = BatchAligner::new(LcsAligner, b"ACGT".to_vec()).unwrap();
        let out = batch.align_all(&[b"ACG".to_vec(), Vec::new(), b"T".to_vec()]);
        assert!(out[0].is_ok());
        assert!(matches!(out[1], Err(AlignError::Precondition { .. })));
        assert!(out[2].is_ok());
    }

    #[test]
    fn parallel_path_matches_sequential() {
        let standard = b"GATCACTAGCAGCAGT".to_vec();
        let queries: Vec<Vec<u8>> = (0..40)
            .map(|k| b"GACTAGGAGTACACCC"[..(k % 16) + 1].to_vec())
            .collect();
        let batch = BatchAlignerBuilder::new(AnchorAligner, standard.clone())
            .with_parallel_threshold(1)
            .build()
            .unwrap();
        let out = batch.align_all(&queries);
        for (q, got) in queries.iter().zip(out) {
            assert_eq!(got.unwrap(), align(&standard, q).unwrap());
        }
    }
}

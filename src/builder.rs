use crate::engine::{BatchAligner, DEFAULT_PARALLEL_THRESHOLD};
use crate::error::{AlignResult, Operand};
use crate::traits::PairwiseAligner;
use crate::utils::check_length;

pub struct BatchAlignerBuilder<A: PairwiseAligner> {
    aligner: A,
    standard: Vec<u8>,
    parallel_threshold: Option<usize>,
}

impl<A: PairwiseAligner> BatchAlignerBuilder<A> {
    pub fn new(aligner: A, standard: Vec<u8>) -> Self {
        Self {
            aligner,
            standard,
            parallel_threshold: None,
        }
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold.max(1));
        self
    }
    pub fn build(self) -> AlignResult<BatchAligner<A>> {
        check_length(Operand::A, &self.standard, 0)?;
        let threshold = self
            .parallel_threshold
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        Ok(BatchAligner::from_parts(
            self.aligner,
            self.standard,
            threshold,
        ))
    }
}

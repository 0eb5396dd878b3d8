//! The contiguous-match triple reported by the longest-match finder.

/// A run of `len` equal bytes starting at `pos_a` in `a` and `pos_b` in `b`.
///
/// `len == 0` means "no match"; both positions are then 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    pub len: usize,
    pub pos_a: usize,
    pub pos_b: usize,
}

impl Match {
    /// The "no match" sentinel.
    pub const NONE: Match = Match {
        len: 0,
        pos_a: 0,
        pos_b: 0,
    };

    #[inline]
    pub fn new(len: usize, pos_a: usize, pos_b: usize) -> Self {
        Self { len, pos_a, pos_b }
    }

    /// Returns true if no match was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exclusive end of the run in `a`.
    #[inline]
    pub fn end_a(&self) -> usize {
        self.pos_a + self.len
    }

    /// Exclusive end of the run in `b`.
    #[inline]
    pub fn end_b(&self) -> usize {
        self.pos_b + self.len
    }

    /// `(len, pos_a, pos_b)`.
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.len, self.pos_a, self.pos_b)
    }
}

impl From<(usize, usize, usize)> for Match {
    fn from((len, pos_a, pos_b): (usize, usize, usize)) -> Self {
        Self::new(len, pos_a, pos_b)
    }
}

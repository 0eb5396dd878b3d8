//! Alignment strategies.
//!
//! - [`lccs`]   : longest common contiguous substring finder.
//! - [`anchor`] : anchor-based query padding built on [`lccs`] (gap `-`).
//! - [`lcs`]    : LCS table construction and traceback (gap `_`).

pub mod anchor;
pub mod lccs;
pub mod lcs;

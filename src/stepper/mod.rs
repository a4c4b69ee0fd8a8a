//! Step generators for the three visualized algorithms
//!
//! Each generator consumes a sequence and produces the full [`History`] of
//! snapshots for one run, before any navigation happens. Generators share
//! no state and work on a private copy of the input; histories are a pure
//! function of the sequence and the algorithm.
//!
//! - [`bubble`]: adjacent-swap bubble sort, a comparison snapshot per inner
//!   step plus a post-swap snapshot when a swap occurs
//! - [`insertion`]: insertion sort with the key tracked separately from its
//!   physical slot while the sorted prefix shifts right
//! - [`merge`]: iterative bottom-up merge sort, one coarse snapshot per
//!   completed merge

pub mod bubble;
pub mod insertion;
pub mod merge;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;

use crate::step::History;
use std::fmt;

/// A sorting algorithm that records its intermediate states
///
/// Implementations must be deterministic and total: the same sequence
/// always yields the same history, and generation cannot fail.
pub trait StepGenerator {
    /// Generate the complete snapshot history for `values`.
    ///
    /// The input is copied; the caller's slice is never mutated.
    fn generate(&self, values: &[i64]) -> History;
}

/// Selector for the three available algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge];

    /// Generate a history with this algorithm's step generator
    pub fn generate(&self, values: &[i64]) -> History {
        match self {
            Algorithm::Bubble => BubbleSort.generate(values),
            Algorithm::Insertion => InsertionSort.generate(values),
            Algorithm::Merge => MergeSort.generate(values),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

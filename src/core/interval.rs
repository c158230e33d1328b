//! Working-interval bookkeeping for the impurity calculators.
//!
//! An [`Interval1D`] is a half-open index range `[start, end)` into a
//! sample ordering that the caller has sorted by the feature currently
//! being evaluated. The calculators never sort; they only read through the
//! interval.

use crate::core::error::{Result, TreeSplitError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open index interval `[start, end)` over a sample ordering.
///
/// Invariant: `start < end`. An empty interval is rejected at construction;
/// the degenerate empty *partition* cases the split sweep produces are
/// handled by the calculators, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval1D {
    start: usize,
    end: usize,
}

impl Interval1D {
    /// Create a new interval `[start, end)`.
    ///
    /// Returns an invalid-parameter error when `start >= end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(TreeSplitError::invalid_parameter(
                "interval",
                format!("[{start}, {end})"),
                "start must be smaller than end",
            ));
        }
        Ok(Interval1D { start, end })
    }

    /// Interval start (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Interval end (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered by the interval.
    pub fn length(&self) -> usize {
        self.end - self.start
    }

    /// Whether `index` addresses a sample inside the interval.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Whether `position` is a valid split position for this interval.
    ///
    /// Unlike [`contains`](Self::contains), `end` itself is admissible: a
    /// split at `end` puts every sample in the left partition.
    pub fn contains_split_position(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }

    /// Check that the interval addresses only valid indices of a parallel
    /// array of length `len`.
    pub fn verify_within(&self, len: usize) -> Result<()> {
        if self.end > len {
            return Err(TreeSplitError::index_out_of_bounds(self.end - 1, len));
        }
        Ok(())
    }
}

impl fmt::Display for Interval1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

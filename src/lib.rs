//! # Treesplit
//!
//! An incremental split-evaluation engine for decision tree induction,
//! written in pure Rust.
//!
//! During tree induction, for every feature and every candidate threshold
//! the learner must know the impurity of the left and right partitions.
//! Recomputing aggregate statistics from scratch at each threshold costs
//! O(n) per candidate and O(n^2) per feature. This crate maintains
//! incremental sufficient statistics (per-class weighted counts for
//! classification, weighted sum / sum-of-squares for regression) over a
//! sorted working interval, so a full left-to-right sweep of a feature's
//! candidates costs O(n) total and the split search is dominated by the
//! sort, not the scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use treesplit_rust::{GiniImpurityCalculator, ImpurityCalculator, Interval1D};
//!
//! fn main() -> treesplit_rust::Result<()> {
//!     // Samples sorted by the feature under evaluation.
//!     let targets = [0.0, 0.0, 1.0, 1.0];
//!     let weights = [1.0, 1.0, 1.0, 1.0];
//!     let interval = Interval1D::new(0, 4)?;
//!
//!     let mut calculator = GiniImpurityCalculator::new();
//!     calculator.init(&[0.0, 1.0], &targets, &weights, interval)?;
//!     let node_impurity = calculator.node_impurity()?;
//!
//!     // Monotonic sweep over every admissible split position.
//!     let mut best = (interval.start(), f64::NEG_INFINITY);
//!     for position in interval.start() + 1..interval.end() {
//!         calculator.update_index(position)?;
//!         let improvement = calculator.impurity_improvement(node_impurity)?;
//!         if improvement > best.1 {
//!             best = (position, improvement);
//!         }
//!     }
//!
//!     assert_eq!(best.0, 2); // the pure split
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types, error handling, and the working-interval
//!   value type
//! - [`calculators`]: the [`ImpurityCalculator`] contract and its
//!   classification ([`GiniImpurityCalculator`]) and regression
//!   ([`RegressionImpurityCalculator`]) strategies
//! - [`validation`]: session-entry argument checks for observation
//!   matrices, target vectors and index lists
//!
//! ## Lifecycle
//!
//! One calculator instance is created per tree-builder run and reused
//! across nodes: `init` binds the sample arrays and recomputes from
//! scratch, `update_interval` moves to another node's interval,
//! `update_index` advances the split position incrementally, and `reset`
//! restarts a sweep over the same interval for the next feature. A
//! calculator embodies the mutable scanning state for one sweep on one
//! thread; parallel induction gives each unit of work its own instance.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module
pub mod core;

// Impurity calculator strategies
pub mod calculators;

// Learning-session argument validation
pub mod validation;

// Re-export core functionality for convenience
pub use crate::core::{
    error::{Result, TreeSplitError},
    interval::Interval1D,
    types::{Position, Target, Weight},
};

// Re-export the calculator contract and strategies
pub use crate::calculators::{
    ChildImpurities, GiniImpurityCalculator, ImpurityCalculator, LeafProbabilities,
    RegressionImpurityCalculator,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_compose() {
        let targets = [1.0, 2.0, 3.0];
        let interval = Interval1D::new(0, 3).unwrap();
        let mut calculator = RegressionImpurityCalculator::new();
        calculator.init(&[], &targets, &[], interval).unwrap();
        assert_eq!(calculator.leaf_value().unwrap(), 2.0);
    }

    #[test]
    fn test_error_reexport() {
        let err = TreeSplitError::precondition("test");
        assert_eq!(err.category(), "precondition");
    }
}

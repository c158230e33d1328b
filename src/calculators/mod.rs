//! Impurity calculators for decision tree induction.
//!
//! This module provides the split-evaluation contract ([`ImpurityCalculator`])
//! and its two concrete strategies: [`GiniImpurityCalculator`] for
//! classification and [`RegressionImpurityCalculator`] for regression. Both
//! maintain incremental sufficient statistics over a sorted working interval
//! so a tree builder can score every candidate split of a feature in O(n)
//! total instead of O(n^2).
//!
//! The intended protocol is: `init` once per node interval, a monotonic
//! left-to-right sweep of `update_index` calls while querying improvements,
//! `reset` to restart the sweep for another feature over the same interval,
//! and `update_interval` to move on to a sibling or child node.

pub mod classification;
pub mod regression;

use crate::core::error::{Result, TreeSplitError};
use crate::core::interval::Interval1D;
use crate::core::types::{Position, Target, Weight};
use serde::{Deserialize, Serialize};

pub use classification::GiniImpurityCalculator;
pub use regression::RegressionImpurityCalculator;

/// Impurity of the left and right partitions of a candidate split.
///
/// An empty side is reported as 0 by convention; it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildImpurities {
    /// Impurity of the left partition `[interval.start, position)`.
    pub left: f64,
    /// Impurity of the right partition `[position, interval.end)`.
    pub right: f64,
}

/// Weighted class frequencies over the current working interval, as
/// `(target value, weighted frequency)` pairs in ascending target order.
///
/// Only classification strategies produce entries; regression strategies
/// return an empty mapping.
pub type LeafProbabilities = Vec<(Target, f64)>;

/// Contract for incremental split-statistics maintenance.
///
/// A calculator is created once per tree-builder run and reused across
/// nodes. It borrows the caller-owned target and weight slices for the
/// lifetime `'a` and owns only its accumulator state. Every query made
/// before [`init`](Self::init) fails fast with a precondition-violation
/// error rather than returning a garbage value.
pub trait ImpurityCalculator<'a> {
    /// Bind the calculator to the target/weight arrays and the set of
    /// possible target values, and set the active working interval.
    ///
    /// Recomputes aggregate statistics for the entire interval from
    /// scratch (O(interval length)) and positions the split at
    /// `interval.start` with all mass on the right.
    ///
    /// `unique_targets` is ignored by regression strategies. An empty
    /// `weights` slice means every sample has weight 1.0.
    fn init(
        &mut self,
        unique_targets: &[Target],
        targets: &'a [Target],
        weights: &'a [Weight],
        interval: Interval1D,
    ) -> Result<()>;

    /// Change the working interval and recompute aggregate statistics for
    /// it from scratch (O(new interval length)). Used when moving to a
    /// sibling or child node; not to be confused with
    /// [`update_index`](Self::update_index).
    fn update_interval(&mut self, new_interval: Interval1D) -> Result<()>;

    /// Move the split position forward to `new_position`, folding the
    /// statistics of samples in `[position, new_position)` into the left
    /// accumulator. O(new_position - position), so a full left-to-right
    /// sweep of the interval costs O(n) total.
    ///
    /// Fails with a precondition violation when `new_position` is behind
    /// the current position or outside `[interval.start, interval.end]`.
    fn update_index(&mut self, new_position: Position) -> Result<()>;

    /// Restart the sweep over the current interval: position back to
    /// `interval.start`, all mass on the right. Never re-scans input.
    fn reset(&mut self) -> Result<()>;

    /// Impurity of the entire current working interval treated as one
    /// group. Independent of the split position.
    fn node_impurity(&self) -> Result<f64>;

    /// Impurity of the left and right partitions at the current split
    /// position. An empty side yields impurity 0.
    fn child_impurities(&self) -> Result<ChildImpurities>;

    /// Sum of sample weights in the left partition.
    fn weighted_left(&self) -> Result<f64>;

    /// Sum of sample weights in the right partition.
    fn weighted_right(&self) -> Result<f64>;

    /// Weighted-average impurity reduction achieved by splitting at the
    /// current position versus not splitting:
    ///
    /// `parent - (wL / W) * left - (wR / W) * right`
    ///
    /// Defined as 0 when the total weight is 0.
    fn impurity_improvement(&self, parent_impurity: f64) -> Result<f64> {
        let children = self.child_impurities()?;
        let weighted_left = self.weighted_left()?;
        let weighted_right = self.weighted_right()?;
        let total = weighted_left + weighted_right;
        if total == 0.0 {
            return Ok(0.0);
        }
        Ok(parent_impurity
            - weighted_left / total * children.left
            - weighted_right / total * children.right)
    }

    /// Leaf prediction derived from the whole current interval: the
    /// weighted mean target for regression, the majority-weighted target
    /// value for classification (smallest target value wins ties).
    fn leaf_value(&self) -> Result<Target>;

    /// Weighted class frequencies over the whole current interval.
    /// Regression strategies return an empty mapping, never an error.
    fn leaf_probabilities(&self) -> Result<LeafProbabilities>;
}

/// Borrowed view of the caller-owned sample data plus the active interval.
///
/// Shared bookkeeping for both strategies; constructed by `init` and
/// re-validated on every `update_interval`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundData<'a> {
    pub(crate) targets: &'a [Target],
    pub(crate) weights: &'a [Weight],
    pub(crate) interval: Interval1D,
}

impl<'a> BoundData<'a> {
    /// Validate the input contract and bind the slices.
    pub(crate) fn bind(
        targets: &'a [Target],
        weights: &'a [Weight],
        interval: Interval1D,
    ) -> Result<Self> {
        crate::ensure!(
            !targets.is_empty(),
            TreeSplitError::data_dimension_mismatch("targets does not contain any rows")
        );
        if !weights.is_empty() && weights.len() != targets.len() {
            return Err(TreeSplitError::data_dimension_mismatch(format!(
                "weights length: {} and targets length: {} does not match",
                weights.len(),
                targets.len()
            )));
        }
        interval.verify_within(targets.len())?;
        Ok(BoundData {
            targets,
            weights,
            interval,
        })
    }

    /// Rebind the working interval, keeping the slices.
    pub(crate) fn rebind(&mut self, new_interval: Interval1D) -> Result<()> {
        new_interval.verify_within(self.targets.len())?;
        self.interval = new_interval;
        Ok(())
    }

    /// Weight of sample `i`; 1.0 in unweighted mode.
    #[inline]
    pub(crate) fn weight(&self, i: usize) -> Weight {
        if self.weights.is_empty() {
            1.0
        } else {
            self.weights[i]
        }
    }
}

/// Error for any query made on a calculator that has not been initialized.
pub(crate) fn not_initialized() -> TreeSplitError {
    TreeSplitError::precondition("impurity calculator queried before init")
}

/// Validate a split-position move against the monotonic-sweep contract.
pub(crate) fn verify_position_move(
    interval: &Interval1D,
    current: Position,
    new_position: Position,
) -> Result<()> {
    if new_position < current {
        return Err(TreeSplitError::precondition(format!(
            "split position moved backward: {current} -> {new_position}; \
             call reset to restart the sweep"
        )));
    }
    if !interval.contains_split_position(new_position) {
        return Err(TreeSplitError::precondition(format!(
            "split position {new_position} outside interval {interval}"
        )));
    }
    Ok(())
}

// Calculators embody per-sweep mutable state: they may be moved to a worker
// thread but are never shared between threads.
static_assertions::assert_impl_all!(GiniImpurityCalculator<'static>: Send);
static_assertions::assert_impl_all!(RegressionImpurityCalculator<'static>: Send);

//! Gini impurity calculator for classification tree induction.
//!
//! Maintains per-class weighted counts for the working interval (total) and
//! for the left partition of the current split position; right-side counts
//! are derived as total minus left, which keeps the left/right weight sums
//! exactly consistent with the interval total throughout a sweep.

use crate::calculators::{
    not_initialized, verify_position_move, BoundData, ChildImpurities, ImpurityCalculator,
    LeafProbabilities,
};
use crate::core::error::{Result, TreeSplitError};
use crate::core::interval::Interval1D;
use crate::core::types::{Position, Target, Weight};

/// Classification impurity calculator using the Gini index.
///
/// Accumulator shape: one weighted count per unique target value. The
/// unique target set is fixed at [`init`](ImpurityCalculator::init) and
/// stored sorted ascending, which makes the majority-vote tie-break
/// (smallest target value wins) fall out of a strict-greater scan.
#[derive(Debug, Clone, Default)]
pub struct GiniImpurityCalculator<'a> {
    binding: Option<BoundData<'a>>,
    unique_targets: Vec<Target>,
    position: Position,
    weighted_total: f64,
    weighted_left: f64,
    class_weights_total: Vec<f64>,
    class_weights_left: Vec<f64>,
}

impl<'a> GiniImpurityCalculator<'a> {
    /// Create an unbound calculator. Every query before
    /// [`init`](ImpurityCalculator::init) fails with a precondition error.
    pub fn new() -> Self {
        Self::default()
    }

    /// The unique target values the calculator was initialized with,
    /// sorted ascending.
    pub fn unique_targets(&self) -> &[Target] {
        &self.unique_targets
    }

    /// Current split position within the working interval.
    pub fn position(&self) -> Position {
        self.position
    }

    fn binding(&self) -> Result<&BoundData<'a>> {
        self.binding.as_ref().ok_or_else(not_initialized)
    }

    /// Index of `target` in the sorted unique target set.
    fn class_index(&self, target: Target) -> Result<usize> {
        self.unique_targets
            .binary_search_by(|probe| probe.total_cmp(&target))
            .map_err(|_| {
                TreeSplitError::invalid_parameter(
                    "targets",
                    format!("{target}"),
                    "target value not present in the unique target set",
                )
            })
    }

    /// Recompute the whole-interval class counts from scratch and restart
    /// the sweep. O(interval length).
    fn recompute_statistics(&mut self) -> Result<()> {
        let binding = *self.binding()?;
        let class_count = self.unique_targets.len();

        self.class_weights_total.clear();
        self.class_weights_total.resize(class_count, 0.0);
        self.weighted_total = 0.0;

        for i in binding.interval.start()..binding.interval.end() {
            let class = self.class_index(binding.targets[i])?;
            let weight = binding.weight(i);
            self.class_weights_total[class] += weight;
            self.weighted_total += weight;
        }

        self.restart_sweep(binding.interval.start());
        Ok(())
    }

    /// Put all mass back on the right side. O(class count), no input scan.
    fn restart_sweep(&mut self, start: Position) {
        self.class_weights_left.clear();
        self.class_weights_left
            .resize(self.class_weights_total.len(), 0.0);
        self.weighted_left = 0.0;
        self.position = start;
    }

    /// Gini index `1 - sum((w_c / total)^2)`; 0 for an empty group.
    fn gini(class_weights: impl Iterator<Item = f64>, total: f64) -> f64 {
        if total == 0.0 {
            return 0.0;
        }
        let sum_of_squares: f64 = class_weights.map(|w| (w / total) * (w / total)).sum();
        1.0 - sum_of_squares
    }
}

impl<'a> ImpurityCalculator<'a> for GiniImpurityCalculator<'a> {
    fn init(
        &mut self,
        unique_targets: &[Target],
        targets: &'a [Target],
        weights: &'a [Weight],
        interval: Interval1D,
    ) -> Result<()> {
        crate::ensure!(
            !unique_targets.is_empty(),
            TreeSplitError::invalid_parameter(
                "unique_targets",
                "[]",
                "classification requires at least one target value",
            )
        );

        self.unique_targets = unique_targets.to_vec();
        self.unique_targets.sort_by(|a, b| a.total_cmp(b));
        self.unique_targets
            .dedup_by(|a, b| a.total_cmp(b).is_eq());

        self.binding = Some(BoundData::bind(targets, weights, interval)?);
        if let Err(err) = self.recompute_statistics() {
            // A target outside the unique set leaves the calculator unbound
            // rather than half-initialized.
            self.binding = None;
            return Err(err);
        }

        log::debug!(
            "gini calculator bound: interval={}, classes={}, total_weight={}",
            interval,
            self.unique_targets.len(),
            self.weighted_total
        );
        Ok(())
    }

    fn update_interval(&mut self, new_interval: Interval1D) -> Result<()> {
        let binding = self.binding.as_mut().ok_or_else(not_initialized)?;
        binding.rebind(new_interval)?;
        if let Err(err) = self.recompute_statistics() {
            self.binding = None;
            return Err(err);
        }
        log::trace!("gini calculator moved to interval {}", new_interval);
        Ok(())
    }

    fn update_index(&mut self, new_position: Position) -> Result<()> {
        let binding = *self.binding()?;
        verify_position_move(&binding.interval, self.position, new_position)?;

        for i in self.position..new_position {
            let class = self.class_index(binding.targets[i])?;
            let weight = binding.weight(i);
            self.class_weights_left[class] += weight;
            self.weighted_left += weight;
        }
        self.position = new_position;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        let start = self.binding()?.interval.start();
        self.restart_sweep(start);
        Ok(())
    }

    fn node_impurity(&self) -> Result<f64> {
        self.binding()?;
        Ok(Self::gini(
            self.class_weights_total.iter().copied(),
            self.weighted_total,
        ))
    }

    fn child_impurities(&self) -> Result<ChildImpurities> {
        self.binding()?;
        let left = Self::gini(self.class_weights_left.iter().copied(), self.weighted_left);
        let right = Self::gini(
            self.class_weights_total
                .iter()
                .zip(&self.class_weights_left)
                .map(|(total, left)| total - left),
            self.weighted_total - self.weighted_left,
        );
        Ok(ChildImpurities { left, right })
    }

    fn weighted_left(&self) -> Result<f64> {
        self.binding()?;
        Ok(self.weighted_left)
    }

    fn weighted_right(&self) -> Result<f64> {
        self.binding()?;
        Ok(self.weighted_total - self.weighted_left)
    }

    /// Majority-weighted target value over the whole interval. Ties are
    /// broken deterministically in favor of the smallest target value.
    fn leaf_value(&self) -> Result<Target> {
        self.binding()?;
        let mut best_target = self.unique_targets[0];
        let mut best_weight = self.class_weights_total[0];
        for (target, &weight) in self
            .unique_targets
            .iter()
            .zip(&self.class_weights_total)
            .skip(1)
        {
            if weight > best_weight {
                best_weight = weight;
                best_target = *target;
            }
        }
        Ok(best_target)
    }

    fn leaf_probabilities(&self) -> Result<LeafProbabilities> {
        self.binding()?;
        let probabilities = self
            .unique_targets
            .iter()
            .zip(&self.class_weights_total)
            .map(|(&target, &weight)| {
                let frequency = if self.weighted_total == 0.0 {
                    0.0
                } else {
                    weight / self.weighted_total
                };
                (target, frequency)
            })
            .collect();
        Ok(probabilities)
    }
}

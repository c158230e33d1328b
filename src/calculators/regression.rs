//! Variance impurity calculator for regression tree induction.
//!
//! The sufficient statistics are scalar: weighted count, weighted sum and
//! weighted sum-of-squares. Right-side statistics are derived as total
//! minus left, so the side weight sums stay exactly consistent with the
//! interval total throughout a sweep.

use crate::calculators::{
    not_initialized, verify_position_move, BoundData, ChildImpurities, ImpurityCalculator,
    LeafProbabilities,
};
use crate::core::error::Result;
use crate::core::interval::Interval1D;
use crate::core::types::{Position, Target, Weight, PARALLEL_CUTOFF};
use rayon::prelude::*;

/// Regression impurity calculator using weighted population variance.
///
/// Impurity is `sum(w * t^2) / W - (sum(w * t) / W)^2`, clamped at 0
/// against floating-point cancellation; an empty group has impurity 0.
#[derive(Debug, Clone, Default)]
pub struct RegressionImpurityCalculator<'a> {
    binding: Option<BoundData<'a>>,
    position: Position,
    weighted_total: f64,
    sum_total: f64,
    sum_sq_total: f64,
    weighted_left: f64,
    sum_left: f64,
    sum_sq_left: f64,
}

impl<'a> RegressionImpurityCalculator<'a> {
    /// Create an unbound calculator. Every query before
    /// [`init`](ImpurityCalculator::init) fails with a precondition error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current split position within the working interval.
    pub fn position(&self) -> Position {
        self.position
    }

    fn binding(&self) -> Result<&BoundData<'a>> {
        self.binding.as_ref().ok_or_else(not_initialized)
    }

    /// Recompute the whole-interval sums from scratch and restart the
    /// sweep. O(interval length); uses a rayon reduction for large
    /// intervals.
    fn recompute_statistics(&mut self) -> Result<()> {
        let binding = *self.binding()?;
        let range = binding.interval.start()..binding.interval.end();

        let (weighted, sum, sum_sq) = if binding.interval.length() >= PARALLEL_CUTOFF {
            range
                .into_par_iter()
                .map(|i| {
                    let weight = binding.weight(i);
                    let target = binding.targets[i];
                    (weight, weight * target, weight * target * target)
                })
                .reduce(|| (0.0, 0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2))
        } else {
            let mut weighted = 0.0;
            let mut sum = 0.0;
            let mut sum_sq = 0.0;
            for i in range {
                let weight = binding.weight(i);
                let target = binding.targets[i];
                weighted += weight;
                sum += weight * target;
                sum_sq += weight * target * target;
            }
            (weighted, sum, sum_sq)
        };

        self.weighted_total = weighted;
        self.sum_total = sum;
        self.sum_sq_total = sum_sq;
        self.restart_sweep(binding.interval.start());
        Ok(())
    }

    /// Put all mass back on the right side. O(1), no input scan.
    fn restart_sweep(&mut self, start: Position) {
        self.weighted_left = 0.0;
        self.sum_left = 0.0;
        self.sum_sq_left = 0.0;
        self.position = start;
    }

    /// Weighted population variance; 0 for an empty group.
    fn variance(weighted: f64, sum: f64, sum_sq: f64) -> f64 {
        if weighted == 0.0 {
            return 0.0;
        }
        let mean = sum / weighted;
        (sum_sq / weighted - mean * mean).max(0.0)
    }
}

impl<'a> ImpurityCalculator<'a> for RegressionImpurityCalculator<'a> {
    fn init(
        &mut self,
        _unique_targets: &[Target],
        targets: &'a [Target],
        weights: &'a [Weight],
        interval: Interval1D,
    ) -> Result<()> {
        self.binding = Some(BoundData::bind(targets, weights, interval)?);
        self.recompute_statistics()?;
        log::debug!(
            "regression calculator bound: interval={}, total_weight={}",
            interval,
            self.weighted_total
        );
        Ok(())
    }

    fn update_interval(&mut self, new_interval: Interval1D) -> Result<()> {
        let binding = self.binding.as_mut().ok_or_else(not_initialized)?;
        binding.rebind(new_interval)?;
        self.recompute_statistics()?;
        log::trace!("regression calculator moved to interval {}", new_interval);
        Ok(())
    }

    fn update_index(&mut self, new_position: Position) -> Result<()> {
        let binding = *self.binding()?;
        verify_position_move(&binding.interval, self.position, new_position)?;

        for i in self.position..new_position {
            let weight = binding.weight(i);
            let target = binding.targets[i];
            self.weighted_left += weight;
            self.sum_left += weight * target;
            self.sum_sq_left += weight * target * target;
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
        Ok(Self::variance(
            self.weighted_total,
            self.sum_total,
            self.sum_sq_total,
        ))
    }

    fn child_impurities(&self) -> Result<ChildImpurities> {
        self.binding()?;
        let left = Self::variance(self.weighted_left, self.sum_left, self.sum_sq_left);
        let right = Self::variance(
            self.weighted_total - self.weighted_left,
            self.sum_total - self.sum_left,
            self.sum_sq_total - self.sum_sq_left,
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

    /// Weighted mean target over the whole interval; 0 when the interval
    /// carries no mass.
    fn leaf_value(&self) -> Result<Target> {
        self.binding()?;
        if self.weighted_total == 0.0 {
            return Ok(0.0);
        }
        Ok(self.sum_total / self.weighted_total)
    }

    fn leaf_probabilities(&self) -> Result<LeafProbabilities> {
        self.binding()?;
        Ok(Vec::new())
    }
}

//! Argument validation for learning sessions.
//!
//! These checks guard entry into the whole learning pipeline and run once
//! at session start, never inside the per-split hot loop. Each failure
//! carries a human-readable message naming the dimension that mismatched.

use crate::core::error::{Result, TreeSplitError};
use crate::core::types::Target;
use ndarray::ArrayView2;

/// Verify that an observation matrix and a target vector are consistent:
/// a non-empty matrix, a non-empty target vector, and matching row count
/// and target length.
pub fn verify_observations_and_targets(
    observations: &ArrayView2<'_, f64>,
    targets: &[Target],
) -> Result<()> {
    verify_dimensions(observations.nrows(), observations.ncols(), targets.len())
}

/// Raw-dimension variant of [`verify_observations_and_targets`] for callers
/// that hold shapes rather than views.
pub fn verify_dimensions(
    row_count: usize,
    column_count: usize,
    target_length: usize,
) -> Result<()> {
    verify_observations(row_count, column_count)?;
    verify_targets(target_length)?;
    verify_rows_and_targets_match(row_count, target_length)
}

/// Verify that the observation matrix is non-empty in both dimensions.
pub fn verify_observations(row_count: usize, column_count: usize) -> Result<()> {
    crate::ensure!(
        row_count > 0,
        TreeSplitError::data_dimension_mismatch("observations does not contain any rows")
    );
    crate::ensure!(
        column_count > 0,
        TreeSplitError::data_dimension_mismatch("observations does not contain any columns")
    );
    Ok(())
}

/// Verify that the target vector is non-empty.
pub fn verify_targets(target_length: usize) -> Result<()> {
    crate::ensure!(
        target_length > 0,
        TreeSplitError::data_dimension_mismatch("targets does not contain any rows")
    );
    Ok(())
}

/// Verify that the observation row count and the target length match.
pub fn verify_rows_and_targets_match(row_count: usize, target_length: usize) -> Result<()> {
    if row_count != target_length {
        return Err(TreeSplitError::data_dimension_mismatch(format!(
            "observation row count: {row_count} and target length: {target_length} does not match"
        )));
    }
    Ok(())
}

/// Verify that an index list addresses only valid rows of the observation
/// matrix and target vector.
///
/// `usize` indices make the original negative-index check unrepresentable;
/// only the upper bound needs verification.
pub fn verify_indices(indices: &[usize], row_count: usize, target_length: usize) -> Result<()> {
    let bound = row_count.min(target_length);
    if let Some(&max) = indices.iter().max() {
        if max >= bound {
            return Err(TreeSplitError::index_out_of_bounds(max, bound));
        }
    }
    Ok(())
}

/// Convenience variant of [`verify_indices`] taking the observation view
/// directly.
pub fn verify_indices_for(
    indices: &[usize],
    observations: &ArrayView2<'_, f64>,
    targets: &[Target],
) -> Result<()> {
    verify_indices(indices, observations.nrows(), targets.len())
}

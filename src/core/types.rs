//! Core data types for the treesplit engine.
//!
//! This module defines the numeric aliases shared by the impurity
//! calculators and the validation collaborator. Targets and weights are
//! 64-bit floats throughout: impurity accumulation is a long chain of
//! additions and cancellations, and the extra mantissa bits keep the
//! incremental and from-scratch paths in agreement.

/// Target (label) value type. Classification targets are real-valued class
/// labels drawn from a finite unique set; regression targets are arbitrary
/// reals.
pub type Target = f64;

/// Sample weight type. Weights are non-negative; a weight of zero
/// contributes no mass but still occupies an index.
pub type Weight = f64;

/// Split position / sample index type.
pub type Position = usize;

/// Minimum interval length before full-interval recomputation switches to a
/// rayon parallel reduction. Below this the sequential loop wins.
pub const PARALLEL_CUTOFF: usize = 1024;

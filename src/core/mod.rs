//! Core infrastructure for the treesplit engine.
//!
//! Fundamental types, the error hierarchy, and the working-interval value
//! type shared by both calculator strategies.

pub mod error;
pub mod interval;
pub mod types;

pub use error::{Result, TreeSplitError};
pub use interval::Interval1D;
pub use types::{Position, Target, Weight, PARALLEL_CUTOFF};

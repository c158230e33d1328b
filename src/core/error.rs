//! Error handling and error types for the treesplit engine.
//!
//! The engine is purely computational and deterministic: every failure is
//! reproducible, is surfaced immediately, and must not be masked. There are
//! no retries anywhere in this crate.

use thiserror::Error;

/// Main error type for the treesplit library.
///
/// Covers the two fatal error classes of the engine: precondition
/// violations of the calculator protocol, and argument-validity errors
/// raised before learning begins. Degenerate inputs (empty partitions, zero
/// total weight) are handled by policy in the calculators and never appear
/// here.
#[derive(Error, Debug)]
pub enum TreeSplitError {
    /// Calculator protocol violation: query before `init`, or a
    /// non-monotonic / out-of-range split position.
    #[error("Precondition violation: {message}")]
    Precondition { message: String },

    /// Data dimension mismatch between observations, targets or weights.
    #[error("Data dimension mismatch: {message}")]
    DataDimensionMismatch { message: String },

    /// Invalid input parameters.
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Out of bounds access.
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Internal library errors (should not occur in normal usage).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using TreeSplitError.
pub type Result<T> = std::result::Result<T, TreeSplitError>;

impl TreeSplitError {
    /// Create a precondition-violation error.
    pub fn precondition<S: Into<String>>(message: S) -> Self {
        TreeSplitError::Precondition {
            message: message.into(),
        }
    }

    /// Create a data dimension mismatch error.
    pub fn data_dimension_mismatch<S: Into<String>>(message: S) -> Self {
        TreeSplitError::DataDimensionMismatch {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        TreeSplitError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an index out of bounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        TreeSplitError::IndexOutOfBounds { index, length }
    }

    /// Create an internal error (should be used sparingly).
    pub fn internal<S: Into<String>>(message: S) -> Self {
        TreeSplitError::Internal {
            message: message.into(),
        }
    }

    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            TreeSplitError::Precondition { .. } => "precondition",
            TreeSplitError::DataDimensionMismatch { .. } => "data_dimension_mismatch",
            TreeSplitError::InvalidParameter { .. } => "invalid_parameter",
            TreeSplitError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            TreeSplitError::Internal { .. } => "internal",
        }
    }
}

/// Bail out with the given error when the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

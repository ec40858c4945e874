//! Errors reported for structurally invalid input.
//!
//! Non-finite numbers coming out of an evaluation or a diverging run are
//! results, not errors, and never show up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown function id `{0}`")]
    UnknownFunction(String),

    #[error("function `{0}` is not in the integration catalog")]
    NotIntegrable(String),

    #[error("unknown partition method `{0}` (expected `left`, `right` or `midpoint`)")]
    UnknownMethod(String),

    #[error("invalid interval [{a}, {b}]: bounds and width must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("partition count must be at least 1")]
    EmptyPartition,

    #[error("learning rate must be finite and non-negative, got {0}")]
    InvalidLearningRate(f64),

    #[error("invalid dataset configuration: {0}")]
    InvalidDataset(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Shared validation for the descent entry points.
pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if learning_rate.is_finite() && learning_rate >= 0. {
        Ok(())
    } else {
        Err(EngineError::InvalidLearningRate(learning_rate))
    }
}

/// Shared validation for anything defined over `[a, b]`.
pub(crate) fn check_interval(a: f64, b: f64) -> Result<()> {
    if a.is_finite() && b.is_finite() && a < b && (b - a).is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidInterval { a, b })
    }
}

//! Error types for monitoring operations
//!
//! A malformed metric indicates an upstream measurement defect the policy
//! cannot safely interpret, so it is surfaced immediately with no retry.

use thiserror::Error;

/// Result type for monitoring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while monitoring a model
#[derive(Debug, Error)]
pub enum Error {
    /// Observed metric is NaN, infinite, or negative
    #[error("Invalid metric value {value}: {detail}")]
    InvalidMetric { value: f64, detail: &'static str },

    /// Prediction and target slices differ in length
    #[error("Prediction/target length mismatch: {predictions} predictions, {targets} targets")]
    LengthMismatch { predictions: usize, targets: usize },

    /// Evaluation set contains no samples
    #[error("Evaluation set is empty")]
    EmptyEvaluation,

    /// Configuration load, parse, or validation failure
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The retraining trigger reported a failure
    #[error("Retraining trigger failed: {0}")]
    TriggerError(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error came from a malformed observed metric
    #[must_use]
    pub fn is_invalid_metric(&self) -> bool {
        matches!(self, Self::InvalidMetric { .. })
    }

    /// Check if the error came from defective evaluation inputs
    #[must_use]
    pub fn is_input_defect(&self) -> bool {
        matches!(
            self,
            Self::InvalidMetric { .. } | Self::LengthMismatch { .. } | Self::EmptyEvaluation
        )
    }
}

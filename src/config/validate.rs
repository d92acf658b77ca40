//! Configuration validation
//!
//! Validates monitoring specifications for correctness before use.

use super::schema::MonitorSpec;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Model name cannot be empty")]
    EmptyModelName,

    #[error("Invalid threshold: {0} (must be finite)")]
    NonFiniteThreshold(f64),

    #[error("Invalid threshold: {0} (must be non-negative)")]
    NegativeThreshold(f64),
}

/// Validate a monitoring specification
///
/// Checks:
/// - model name is non-empty
/// - threshold is finite and non-negative
pub fn validate_spec(spec: &MonitorSpec) -> Result<(), ValidationError> {
    if spec.model.trim().is_empty() {
        return Err(ValidationError::EmptyModelName);
    }

    if !spec.policy.threshold.is_finite() {
        return Err(ValidationError::NonFiniteThreshold(spec.policy.threshold));
    }

    if spec.policy.threshold < 0.0 {
        return Err(ValidationError::NegativeThreshold(spec.policy.threshold));
    }

    Ok(())
}

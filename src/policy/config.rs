//! Retraining policy configuration.

use serde::{Deserialize, Serialize};

/// How an observed metric is compared against the threshold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Retrain iff the observed metric strictly exceeds the threshold;
    /// a metric equal to the threshold is satisfactory
    #[default]
    GreaterThan,
}

/// Configuration for the retraining decision policy
///
/// Supplied at construction and immutable for the policy's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Maximum acceptable metric value before retraining is warranted
    pub threshold: f64,
    /// Comparison applied at the threshold
    #[serde(default)]
    pub comparison: Comparison,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            comparison: Comparison::GreaterThan,
        }
    }
}

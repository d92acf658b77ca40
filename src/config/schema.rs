//! YAML schema definitions for monitoring configuration

use serde::{Deserialize, Serialize};

use crate::metrics::MetricKind;
use crate::policy::{Comparison, PolicyConfig};

/// Complete monitoring specification
///
/// # Example
///
/// ```yaml
/// model: screentime-forest
/// metric: mae
/// policy:
///   threshold: 10.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSpec {
    /// Name of the deployed model under watch
    pub model: String,

    /// Metric the monitor evaluates
    #[serde(default)]
    pub metric: MetricKind,

    /// Retraining policy settings
    #[serde(default)]
    pub policy: PolicySpec,
}

impl MonitorSpec {
    /// Policy configuration carried by this spec
    pub fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            threshold: self.policy.threshold,
            comparison: self.policy.comparison,
        }
    }
}

/// Policy section of the monitoring spec
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicySpec {
    /// Maximum acceptable metric value before retraining is warranted
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Comparison applied at the threshold
    #[serde(default)]
    pub comparison: Comparison,
}

impl Default for PolicySpec {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            comparison: Comparison::default(),
        }
    }
}

fn default_threshold() -> f64 {
    10.0
}

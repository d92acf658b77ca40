//! Evaluation result structure

use std::fmt;

use super::kind::MetricKind;
use crate::error::Result;

/// Outcome of scoring a deployed model against held-out labeled data
///
/// Produced once per monitoring invocation and consumed immediately by the
/// retraining policy; nothing here is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    /// Metric that was computed
    pub metric: MetricKind,
    /// Computed metric value
    pub value: f64,
    /// Number of samples scored
    pub sample_count: usize,
}

impl EvaluationResult {
    /// Score predictions against targets with the given metric
    pub fn compute(metric: MetricKind, predictions: &[f64], targets: &[f64]) -> Result<Self> {
        let value = metric.compute(predictions, targets)?;
        Ok(Self {
            metric,
            value,
            sample_count: predictions.len(),
        })
    }

    /// Wrap a pre-computed metric value
    ///
    /// For metrics scored outside this crate the sample count is not
    /// recorded and is reported as 0.
    pub fn from_value(metric: MetricKind, value: f64) -> Self {
        Self {
            metric,
            value,
            sample_count: 0,
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sample_count > 0 {
            write!(
                f,
                "{}: {:.4} ({} samples)",
                self.metric.name(),
                self.value,
                self.sample_count
            )
        } else {
            write!(f, "{}: {:.4}", self.metric.name(), self.value)
        }
    }
}

//! Decision emitted by the retraining policy.

use std::fmt;

/// Outcome of evaluating an observed metric against the policy
///
/// A derived value with no lifecycle of its own: computed, handed to the
/// caller, and consumed immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct RetrainDecision {
    /// Whether the caller should invoke the retraining trigger
    pub should_retrain: bool,
    /// Human-readable reason for the decision
    pub reason: String,
    /// Metric value that was evaluated
    pub observed_metric: f64,
    /// Threshold the metric was compared against
    pub threshold: f64,
}

impl fmt::Display for RetrainDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (observed {:.4}, threshold {:.4})",
            self.reason, self.observed_metric, self.threshold
        )
    }
}

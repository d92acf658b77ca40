//! Model monitor implementation.

use super::action::Action;
use crate::error::Result;
use crate::metrics::EvaluationResult;
use crate::policy::{RetrainDecision, RetrainPolicy};

/// Callback type for retrain triggers
///
/// The callback receives the decision that warranted retraining and should
/// return a job ID, or an error if retraining failed to start.
pub type RetrainCallback = Box<dyn Fn(&RetrainDecision) -> Result<String> + Send + Sync>;

/// Watches a deployed model's error metric and triggers retraining
///
/// The monitor owns nothing but the policy and the caller-supplied trigger:
/// it evaluates each observation, and iff the decision calls for retraining
/// it invokes the trigger. With no trigger wired, a positive decision is
/// reported as [`Action::RetrainRequested`] and left to the caller.
pub struct ModelMonitor {
    policy: RetrainPolicy,
    retrain_callback: Option<RetrainCallback>,
    checks: usize,
    retrains_triggered: usize,
}

impl ModelMonitor {
    /// Create a monitor applying the given policy
    pub fn new(policy: RetrainPolicy) -> Self {
        Self {
            policy,
            retrain_callback: None,
            checks: 0,
            retrains_triggered: 0,
        }
    }

    /// Set the trigger to invoke when a decision calls for retraining
    pub fn on_retrain<F>(&mut self, callback: F)
    where
        F: Fn(&RetrainDecision) -> Result<String> + Send + Sync + 'static,
    {
        self.retrain_callback = Some(Box::new(callback));
    }

    /// Observe one evaluation result and act on the policy's decision
    pub fn observe(&mut self, result: &EvaluationResult) -> Result<Action> {
        self.check_metric(result.value)
    }

    /// Observe a raw metric value and act on the policy's decision
    ///
    /// Trigger failures propagate to the caller untouched.
    pub fn check_metric(&mut self, observed_metric: f64) -> Result<Action> {
        let decision = self.policy.evaluate(observed_metric)?;
        self.checks += 1;

        if !decision.should_retrain {
            return Ok(Action::None);
        }

        match &self.retrain_callback {
            Some(callback) => {
                let job_id = callback(&decision)?;
                self.retrains_triggered += 1;
                Ok(Action::RetrainTriggered(job_id))
            }
            None => Ok(Action::RetrainRequested),
        }
    }

    /// The policy this monitor applies
    pub fn policy(&self) -> &RetrainPolicy {
        &self.policy
    }

    /// Get statistics about monitoring activity
    pub fn stats(&self) -> MonitorStats {
        MonitorStats {
            checks: self.checks,
            retrains_triggered: self.retrains_triggered,
        }
    }
}

/// Statistics about a monitor's activity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonitorStats {
    /// Observations evaluated
    pub checks: usize,
    /// Retraining runs triggered
    pub retrains_triggered: usize,
}

//! The retraining decision rule.

use super::config::{Comparison, PolicyConfig};
use super::decision::RetrainDecision;
use crate::error::{Error, Result};
use crate::metrics::EvaluationResult;

const REASON_EXCEEDS: &str = "metric exceeds threshold";
const REASON_WITHIN: &str = "metric within threshold";

/// Pure decision rule: does the observed model error justify retraining?
///
/// Stateless per call, idempotent, and referentially transparent: two
/// evaluations of the same input produce the same decision. The policy only
/// decides; invoking the retraining trigger is the caller's responsibility.
///
/// # Example
///
/// ```
/// use vigilar::policy::{PolicyConfig, RetrainPolicy};
///
/// let policy = RetrainPolicy::new(PolicyConfig { threshold: 10.0, ..Default::default() })?;
/// assert!(!policy.evaluate(8.5)?.should_retrain);
/// assert!(policy.evaluate(10.01)?.should_retrain);
/// # Ok::<(), vigilar::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RetrainPolicy {
    config: PolicyConfig,
}

impl RetrainPolicy {
    /// Build a policy from a configuration
    ///
    /// The threshold must be finite and non-negative: the comparison only
    /// makes sense against a value an error metric could legally take.
    pub fn new(config: PolicyConfig) -> Result<Self> {
        if !config.threshold.is_finite() {
            return Err(Error::ConfigError(format!(
                "threshold must be finite, got {}",
                config.threshold
            )));
        }
        if config.threshold < 0.0 {
            return Err(Error::ConfigError(format!(
                "threshold must be non-negative, got {}",
                config.threshold
            )));
        }
        Ok(Self { config })
    }

    /// Evaluate an observed error metric against the configured threshold
    ///
    /// Rejects NaN, infinite, and negative values: error metrics are
    /// non-negative by construction, so anything else is an upstream
    /// measurement defect the policy cannot interpret.
    pub fn evaluate(&self, observed_metric: f64) -> Result<RetrainDecision> {
        if observed_metric.is_nan() {
            return Err(Error::InvalidMetric {
                value: observed_metric,
                detail: "not a number",
            });
        }
        if observed_metric.is_infinite() {
            return Err(Error::InvalidMetric {
                value: observed_metric,
                detail: "not finite",
            });
        }
        if observed_metric < 0.0 {
            return Err(Error::InvalidMetric {
                value: observed_metric,
                detail: "negative",
            });
        }

        let should_retrain = match self.config.comparison {
            Comparison::GreaterThan => observed_metric > self.config.threshold,
        };
        let reason = if should_retrain {
            REASON_EXCEEDS
        } else {
            REASON_WITHIN
        };

        Ok(RetrainDecision {
            should_retrain,
            reason: reason.to_string(),
            observed_metric,
            threshold: self.config.threshold,
        })
    }

    /// Evaluate a full evaluation result
    pub fn evaluate_result(&self, result: &EvaluationResult) -> Result<RetrainDecision> {
        self.evaluate(result.value)
    }

    /// Configured threshold
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Configured comparison
    pub fn comparison(&self) -> Comparison {
        self.config.comparison
    }
}

//! Vigilar: Model Performance Monitoring
//!
//! Watches a deployed model's error metric and decides when retraining is
//! warranted. The decision rule is a pure policy (threshold comparison, no
//! side effects); actually starting a retraining run belongs to an
//! externally owned trigger that the caller wires into the monitor.
//!
//! # Architecture
//!
//! - [`metrics`]: regression error metrics (MAE, MSE, RMSE) over held-out
//!   prediction/target pairs
//! - [`policy`]: the retraining decision rule and its configuration
//! - [`monitor`]: the bridge from a positive decision to the retraining
//!   trigger (Andon pattern)
//! - [`config`]: declarative YAML configuration with validation
//! - [`cli`]: command-line front end
//!
//! # Example
//!
//! ```
//! use vigilar::policy::{PolicyConfig, RetrainPolicy};
//! use vigilar::monitor::{Action, ModelMonitor};
//!
//! # fn main() -> vigilar::Result<()> {
//! let policy = RetrainPolicy::new(PolicyConfig { threshold: 10.0, ..Default::default() })?;
//! let mut monitor = ModelMonitor::new(policy);
//! monitor.on_retrain(|decision| {
//!     // hand off to the training system, return its job id
//!     Ok(format!("retrain-mae-{:.1}", decision.observed_metric))
//! });
//!
//! assert_eq!(monitor.check_metric(8.5)?, Action::None);
//! assert!(matches!(monitor.check_metric(12.0)?, Action::RetrainTriggered(_)));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod monitor;
pub mod policy;

pub use error::{Error, Result};
pub use metrics::{EvaluationResult, MetricKind};
pub use monitor::{Action, ModelMonitor, MonitorStats, RetrainCallback};
pub use policy::{Comparison, PolicyConfig, RetrainDecision, RetrainPolicy};

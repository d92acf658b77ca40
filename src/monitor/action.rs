//! Actions taken by the model monitor.

/// Action taken after one monitoring observation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Metric within threshold, nothing to do
    None,
    /// Policy asked for retraining but no trigger is wired
    RetrainRequested,
    /// Retraining trigger invoked with the job ID it returned
    RetrainTriggered(String),
}

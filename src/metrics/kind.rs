//! Monitoring metric definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use super::regression::{mae, mse, rmse};
use crate::error::Result;

/// Available monitoring metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Mean Absolute Error
    #[default]
    Mae,
    /// Mean Squared Error
    Mse,
    /// Root Mean Squared Error
    Rmse,
}

impl MetricKind {
    /// Get metric name as string
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Mae => "MAE",
            MetricKind::Mse => "MSE",
            MetricKind::Rmse => "RMSE",
        }
    }

    /// Whether higher values are better for this metric
    ///
    /// Always false: every monitoring metric here measures error.
    pub fn higher_is_better(&self) -> bool {
        false
    }

    /// Compute this metric over prediction/target slices
    pub fn compute(&self, predictions: &[f64], targets: &[f64]) -> Result<f64> {
        match self {
            MetricKind::Mae => mae(predictions, targets),
            MetricKind::Mse => mse(predictions, targets),
            MetricKind::Rmse => rmse(predictions, targets),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

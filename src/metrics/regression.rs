//! Regression error metrics over prediction/target slices
//!
//! MAE = mean(|y - y_pred|)
//! MSE = mean((y - y_pred)²)
//! RMSE = sqrt(MSE)
//!
//! An empty evaluation set cannot produce a meaningful error metric, so
//! empty input is rejected rather than mapped to 0.0.

use crate::error::{Error, Result};

fn check_inputs(predictions: &[f64], targets: &[f64]) -> Result<()> {
    if predictions.len() != targets.len() {
        return Err(Error::LengthMismatch {
            predictions: predictions.len(),
            targets: targets.len(),
        });
    }
    if predictions.is_empty() {
        return Err(Error::EmptyEvaluation);
    }
    Ok(())
}

/// Mean Absolute Error
///
/// # Example
///
/// ```
/// let mae = vigilar::metrics::mae(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]).unwrap();
/// assert!((mae - 0.5).abs() < 1e-9);
/// ```
pub fn mae(predictions: &[f64], targets: &[f64]) -> Result<f64> {
    check_inputs(predictions, targets)?;
    let sum: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(&p, &t)| (t - p).abs())
        .sum();
    Ok(sum / predictions.len() as f64)
}

/// Mean Squared Error
pub fn mse(predictions: &[f64], targets: &[f64]) -> Result<f64> {
    check_inputs(predictions, targets)?;
    let sum: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(&p, &t)| (t - p).powi(2))
        .sum();
    Ok(sum / predictions.len() as f64)
}

/// Root Mean Squared Error
pub fn rmse(predictions: &[f64], targets: &[f64]) -> Result<f64> {
    Ok(mse(predictions, targets)?.sqrt())
}

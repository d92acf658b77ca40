//! Check command implementation

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cli::args::CheckArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, MonitorSpec};
use crate::metrics::EvaluationResult;
use crate::monitor::{Action, ModelMonitor};
use crate::policy::RetrainPolicy;

/// Score file layout: held-out predictions and their labels
#[derive(Debug, Deserialize)]
struct ScoreFile {
    predictions: Vec<f64>,
    targets: Vec<f64>,
}

pub fn run_check(args: CheckArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;
    let policy = RetrainPolicy::new(spec.policy_config()).map_err(|e| e.to_string())?;
    let mut monitor = ModelMonitor::new(policy);

    let result = observed_result(&args, &spec).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format!("Model: {}", spec.model));
    log(level, LogLevel::Normal, &result.to_string());
    log(
        level,
        LogLevel::Verbose,
        &format!("  Threshold: {}", spec.policy.threshold),
    );

    let action = monitor.observe(&result).map_err(|e| e.to_string())?;
    match action {
        Action::None => {
            log(level, LogLevel::Normal, "Model performance is satisfactory.");
        }
        Action::RetrainRequested => {
            log(
                level,
                LogLevel::Normal,
                "Metric exceeds threshold. Retraining is warranted.",
            );
        }
        Action::RetrainTriggered(job_id) => {
            // The CLI wires no trigger, but keep the arm exhaustive
            log(
                level,
                LogLevel::Normal,
                &format!("Retraining triggered: {job_id}"),
            );
        }
    }

    Ok(())
}

/// Resolve the metric to evaluate: pre-computed via --metric, or scored
/// from a --scores file with the configured metric.
fn observed_result(args: &CheckArgs, spec: &MonitorSpec) -> crate::error::Result<EvaluationResult> {
    if let Some(value) = args.metric {
        return Ok(EvaluationResult::from_value(spec.metric, value));
    }
    if let Some(path) = &args.scores {
        let scores = load_scores(path)?;
        return EvaluationResult::compute(spec.metric, &scores.predictions, &scores.targets);
    }
    Err(crate::error::Error::ConfigError(
        "provide either --metric or --scores".to_string(),
    ))
}

fn load_scores(path: &Path) -> crate::error::Result<ScoreFile> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

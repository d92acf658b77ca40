//! Info command implementation

use crate::cli::args::InfoArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, MonitorSpec};

/// Format a monitoring spec as a readable summary
pub fn format_spec_summary(spec: &MonitorSpec) -> String {
    [
        format!("  Model: {}", spec.model),
        format!("  Metric: {}", spec.metric.name()),
        format!("  Threshold: {}", spec.policy.threshold),
        format!("  Comparison: {:?}", spec.policy.comparison),
    ]
    .join("\n")
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "Monitoring configuration:");
    log(level, LogLevel::Normal, &format_spec_summary(&spec));

    Ok(())
}

//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! vigilar check monitor.yaml --metric 12.5
//! vigilar check monitor.yaml --scores scores.json
//! vigilar validate monitor.yaml
//! vigilar info monitor.yaml
//! ```

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Vigilar: Model Performance Monitoring
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "vigilar")]
#[command(version)]
#[command(about = "Model performance monitoring with a configurable retraining-decision policy")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Check an observed metric against the configured retraining policy
    Check(CheckArgs),

    /// Validate a configuration file without checking anything
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Pre-computed metric value to evaluate
    #[arg(short, long, conflicts_with = "scores")]
    pub metric: Option<f64>,

    /// JSON file of held-out predictions and targets to score
    #[arg(short, long)]
    pub scores: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from an iterator (useful for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

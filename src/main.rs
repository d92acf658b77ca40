//! Vigilar CLI
//!
//! Model monitoring entry point for the vigilar library.
//!
//! # Usage
//!
//! ```bash
//! # Check a pre-computed metric against the configured policy
//! vigilar check monitor.yaml --metric 12.5
//!
//! # Score held-out predictions with the configured metric, then check
//! vigilar check monitor.yaml --scores scores.json
//!
//! # Validate config
//! vigilar validate monitor.yaml
//!
//! # Show config info
//! vigilar info monitor.yaml
//! ```

use clap::Parser;
use std::process::ExitCode;
use vigilar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

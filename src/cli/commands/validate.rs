//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::load_spec;

use super::info::format_spec_summary;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating {}...", args.config.display()),
    );

    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "✓ Config is valid");
    log(level, LogLevel::Verbose, &format_spec_summary(&spec));

    Ok(())
}

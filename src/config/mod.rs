//! Declarative monitoring configuration
//!
//! YAML schema, validation, and loading for monitor runs. The recognized
//! policy option is a single numeric threshold; everything else defaults to
//! the reference behavior.

mod schema;
mod validate;


pub use schema::{MonitorSpec, PolicySpec};
pub use validate::{validate_spec, ValidationError};

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load and validate a monitoring spec from a YAML file
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<MonitorSpec> {
    let yaml = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    parse_spec(&yaml)
}

/// Parse and validate a monitoring spec from YAML text
pub fn parse_spec(yaml: &str) -> Result<MonitorSpec> {
    let spec: MonitorSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;
    validate_spec(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;
    Ok(spec)
}

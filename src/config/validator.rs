//! Configuration validation rules.
//!
//! - `timeout_secs` must be positive
//! - Tool names must be non-empty and unique
//! - Manifest entries must be non-empty relative paths

use std::collections::HashSet;
use std::path::Path;

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};

/// Validate a configuration and return all problems found.
pub fn validate_config(config: &GateConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.settings.timeout_secs == 0 {
        errors.push("settings.timeout_secs must be greater than 0".to_string());
    }

    let mut seen = HashSet::new();
    for tool in &config.tools {
        if tool.name.trim().is_empty() {
            errors.push("tool name must not be empty".to_string());
        } else if !seen.insert(tool.name.as_str()) {
            errors.push(format!("tool '{}' is listed more than once", tool.name));
        }
    }

    for path in &config.required_files {
        if path.is_empty() {
            errors.push("manifest entry must not be empty".to_string());
        } else if Path::new(path).has_root() {
            errors.push(format!("manifest entry '{}' must be relative", path));
        }
    }

    errors
}

/// Validate a configuration, joining every problem into one error.
pub fn validate(config: &GateConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(GateError::ConfigValidationError {
            message: errors.join("; "),
        })
    }
}

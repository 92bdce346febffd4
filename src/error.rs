//! Error types for buildgate operations.
//!
//! This module defines [`GateError`], the error type used for program-level
//! failures, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check failures (a missing file, a tool below its minimum version) are
//!   values, not errors: they live in the checker result types
//! - `GateError` covers what stops the program from checking at all, such
//!   as an unreadable settings file
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for buildgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Settings file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Settings parsed but hold invalid values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A tool named on the command line is not part of the requirements.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for buildgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = GateError::ConfigNotFound {
            path: PathBuf::from("/repo/.buildgate/config.yml"),
        };
        assert!(err.to_string().contains("/repo/.buildgate/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GateError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_tool_displays_name() {
        let err = GateError::UnknownTool {
            name: "gcc".into(),
        };
        assert_eq!(err.to_string(), "Unknown tool: gcc");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: GateError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}

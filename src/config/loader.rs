//! Settings file discovery and loading.
//!
//! The manifest and tool list are built in; a settings file only tunes
//! behaviour. Without one, the built-in defaults apply unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{GateConfig, SettingsFile};
use crate::config::validator::validate;
use crate::error::{GateError, Result};

/// Directory holding the settings file, relative to the project root.
pub const CONFIG_DIR: &str = ".buildgate";

/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Find the project settings file at `.buildgate/config.yml`.
pub fn find_settings_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into a settings file.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<SettingsFile> {
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the configuration for a run.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project settings file is used when present.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<GateConfig> {
    let mut config = GateConfig::builtin();

    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => find_settings_file(project_root),
    };

    if let Some(path) = path {
        tracing::debug!("Loading settings from {}", path.display());
        config.settings = load_settings_file(&path)?.settings;
    }

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OutputMode, VersionPolicy, DEFAULT_TIMEOUT_SECS};
    use tempfile::TempDir;

    fn write_settings(root: &Path, content: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_settings_file_uses_builtin() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.settings.version_policy, VersionPolicy::Report);
        assert_eq!(config.settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.tools.len(), 4);
    }

    #[test]
    fn discovers_project_settings() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "settings:\n  version_policy: fail\n");

        assert!(find_settings_file(temp.path()).is_some());
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.settings.version_policy, VersionPolicy::Fail);
    }

    #[test]
    fn override_path_wins_over_project_settings() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "settings:\n  default_output: quiet\n");
        let other = temp.path().join("ci.yml");
        fs::write(&other, "settings:\n  default_output: verbose\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Verbose);
    }

    #[test]
    fn missing_override_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, GateError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error_with_path() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(temp.path(), "settings: [unclosed\n");

        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            GateError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_defaults() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "\n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.settings.version_policy, VersionPolicy::Report);
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "settings:\n  timeout_secs: 0\n");
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, GateError::ConfigValidationError { .. }));
    }
}

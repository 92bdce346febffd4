//! Configuration for buildgate.
//!
//! - Schema definitions in [`schema`]
//! - The built-in manifest and tool requirements in [`defaults`]
//! - Settings file discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use buildgate::config::{load_config, VersionPolicy};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".buildgate")).unwrap();
//! fs::write(
//!     temp.path().join(".buildgate/config.yml"),
//!     "settings:\n  version_policy: fail\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.settings.version_policy, VersionPolicy::Fail);
//! ```

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::{builtin_tools, REQUIRED_FILES};
pub use loader::{find_settings_file, load_config, load_settings_file, parse_settings};
pub use schema::{GateConfig, OutputMode, Settings, SettingsFile, VersionPolicy};
pub use validator::{validate, validate_config};

#[cfg(test)]
mod tests {
    #[test]
    fn serde_yaml_parses_basic_yaml() {
        let yaml = "settings:\n  timeout_secs: 12";
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["settings"]["timeout_secs"], 12);
    }
}

//! Configuration schema definitions.
//!
//! [`SettingsFile`] maps to the optional `.buildgate/config.yml`.
//! [`GateConfig`] is the resolved configuration handed to the checkers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::toolchain::ToolSpec;

/// Root structure of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Gate behaviour settings
    pub settings: Settings,
}

/// Settings that tune how the gate behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// What a tool below its minimum version does to the exit status
    pub version_policy: VersionPolicy,

    /// Seconds to wait for each tool to print its version
    pub timeout_secs: u64,

    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_policy: VersionPolicy::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_output: OutputMode::default(),
        }
    }
}

impl Settings {
    /// Per-tool invocation timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Default per-tool timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How a tool below its minimum version affects the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPolicy {
    /// Print the mismatch; the exit status is unaffected.
    #[default]
    Report,
    /// Print the mismatch and fail the run once all tools are checked.
    Fail,
}

/// Output mode as written in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Everything the checkers need for one run.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Relative paths that must exist as regular files, in report order.
    pub required_files: Vec<String>,

    /// Tools to check, in check order.
    pub tools: Vec<ToolSpec>,

    /// Behaviour settings.
    pub settings: Settings,
}

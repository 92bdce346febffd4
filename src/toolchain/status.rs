//! Per-tool check outcomes.
//!
//! Each tool checked by the gate produces a [`ToolCheckResult`] whose
//! [`ToolStatus`] is one of five terminal states. The report line for each
//! state is fixed; callers print [`ToolCheckResult::message`] as-is.

use super::version::Version;

/// The result of checking a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Installed version is at or above the minimum.
    Met { detected: Version },

    /// Installed version is below the minimum.
    Unmet { detected: Version },

    /// The tool ran but printed no recognizable dotted triple.
    Unparsable,

    /// No executable by that name on the search path. Ends the run.
    NotFound,

    /// The tool was found but failed, timed out, or could not be started.
    InvocationError { message: String },
}

impl ToolStatus {
    /// Whether this state stops the remaining tools from being checked.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ToolStatus::NotFound)
    }

    /// Whether the tool meets its requirement.
    pub fn is_met(&self) -> bool {
        matches!(self, ToolStatus::Met { .. })
    }
}

/// The outcome of checking one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheckResult {
    /// Tool name as given in its spec.
    pub tool: String,
    /// Minimum version that was required.
    pub required: Version,
    /// What the check found.
    pub status: ToolStatus,
}

impl ToolCheckResult {
    /// The version the tool reported, when one was extracted.
    pub fn detected(&self) -> Option<Version> {
        match &self.status {
            ToolStatus::Met { detected } | ToolStatus::Unmet { detected } => Some(*detected),
            _ => None,
        }
    }

    /// The report line for this result.
    pub fn message(&self) -> String {
        let tool = &self.tool;
        let min = self.required;
        match &self.status {
            ToolStatus::Met { detected } => {
                format!("{tool} is version {detected}, which meets or exceeds {min}")
            }
            ToolStatus::Unmet { detected } => {
                format!("{tool} version {detected} is lower than the expected {min}")
            }
            ToolStatus::Unparsable => format!("Could not determine {tool} version."),
            ToolStatus::NotFound => format!("{tool} is not installed or not in the PATH."),
            ToolStatus::InvocationError { message } => {
                format!("Error checking {tool} version: {message}")
            }
        }
    }
}

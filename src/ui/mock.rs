//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion, regardless of output mode filtering.
//!
//! # Example
//!
//! ```
//! use buildgate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("All required files are present.");
//! ui.failure("zig is not installed or not in the PATH.");
//!
//! assert!(ui.has_success("All required files"));
//! assert_eq!(ui.lines().len(), 2);
//! ```

use super::{OutputMode, UserInterface};

/// Which UI method produced a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Message,
    Success,
    Warning,
    Failure,
    Detail,
    Error,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<(LineKind, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every captured line with its kind, in output order.
    pub fn captured(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    /// Report lines (everything except stderr errors and details), in order.
    pub fn lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(kind, _)| !matches!(kind, LineKind::Error | LineKind::Detail))
            .map(|(_, line)| line.as_str())
            .collect()
    }

    fn of_kind(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> Vec<&str> {
        self.of_kind(LineKind::Success)
    }

    /// Get all captured warning lines.
    pub fn warnings(&self) -> Vec<&str> {
        self.of_kind(LineKind::Warning)
    }

    /// Get all captured failure lines.
    pub fn failures(&self) -> Vec<&str> {
        self.of_kind(LineKind::Failure)
    }

    /// Get all captured error lines.
    pub fn errors(&self) -> Vec<&str> {
        self.of_kind(LineKind::Error)
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific failure was shown.
    pub fn has_failure(&self, msg: &str) -> bool {
        self.failures().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    fn push(&mut self, kind: LineKind, msg: &str) {
        self.lines.push((kind, msg.to_string()));
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.push(LineKind::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.push(LineKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.push(LineKind::Warning, msg);
    }

    fn failure(&mut self, msg: &str) {
        self.push(LineKind::Failure, msg);
    }

    fn detail(&mut self, msg: &str) {
        self.push(LineKind::Detail, msg);
    }

    fn error(&mut self, msg: &str) {
        self.push(LineKind::Error, msg);
    }
}

//! User interface for check reports.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for console output
//! - [`MockUI`] for capturing output in tests
//!
//! Report lines go to stdout, one per call. Program errors go to stderr.
//!
//! # Example
//!
//! ```
//! use buildgate::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Silent);
//! ui.success("All required files are present.");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::{LineKind, MockUI};
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GateTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a neutral line.
    fn message(&mut self, msg: &str);

    /// Display a passing check.
    fn success(&mut self, msg: &str);

    /// Display a check that is degraded but does not fail on its own.
    fn warning(&mut self, msg: &str);

    /// Display a failed check.
    fn failure(&mut self, msg: &str);

    /// Display extra detail (verbose only).
    fn detail(&mut self, msg: &str);

    /// Display a program error on stderr.
    fn error(&mut self, msg: &str);
}

/// Create the console UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

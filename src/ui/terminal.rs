//! Console UI writing report lines to stdout and errors to stderr.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GateTheme, OutputMode, UserInterface};

/// Line-oriented console UI.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GateTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a console UI, coloring output only when appropriate.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GateTheme::new()
        } else {
            GateTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.highlight.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.success.apply_to(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_problems() {
            writeln!(self.out, "{}", self.theme.warning.apply_to(msg)).ok();
        }
    }

    fn failure(&mut self, msg: &str) {
        if self.mode.shows_problems() {
            writeln!(self.out, "{}", self.theme.error.apply_to(msg)).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.out, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.error.apply_to(msg)).ok();
    }
}

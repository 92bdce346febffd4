//! Visual theme and styling.
//!
//! Styles only color a line; they never change its text, so the report
//! reads the same with and without a TTY.

use console::Style;

/// The console theme.
#[derive(Debug, Clone)]
pub struct GateTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for degraded checks (orange).
    pub warning: Style,
    /// Style for failed checks and errors (red bold).
    pub error: Style,
    /// Style for detail lines (dim).
    pub dim: Style,
    /// Style for section headings (bold).
    pub highlight: Style,
}

impl Default for GateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GateTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_unchanged() {
        let theme = GateTheme::plain();
        assert_eq!(
            theme.success.apply_to("All required files are present.").to_string(),
            "All required files are present."
        );
        assert_eq!(theme.error.apply_to("  - README.md").to_string(), "  - README.md");
    }

    #[test]
    fn default_theme_keeps_text() {
        let theme = GateTheme::default();
        let styled = theme.warning.apply_to("ninja version 1.10.0").to_string();
        assert!(styled.contains("ninja version 1.10.0"));
    }
}

//! The missing-file report and its text form.

/// Header printed above the list of missing files.
pub const MISSING_HEADER: &str = "ERROR: The following files are missing:";

/// Line printed when nothing is missing.
pub const ALL_PRESENT: &str = "All required files are present.";

/// Manifest entries that did not resolve to a regular file, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingFileReport {
    missing: Vec<String>,
}

impl MissingFileReport {
    /// Create a report from missing entries already in manifest order.
    pub fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// Whether every file was present.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing entries.
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    /// The missing entries.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// The report as output lines.
    ///
    /// A single confirmation line when nothing is missing, otherwise the
    /// header followed by one indented line per missing path.
    pub fn lines(&self) -> Vec<String> {
        if self.missing.is_empty() {
            return vec![ALL_PRESENT.to_string()];
        }

        std::iter::once(MISSING_HEADER.to_string())
            .chain(self.missing.iter().map(|path| format!("  - {}", path)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_single_confirmation_line() {
        let report = MissingFileReport::default();
        assert!(report.is_empty());
        assert_eq!(report.lines(), vec!["All required files are present."]);
    }

    #[test]
    fn missing_report_lists_header_then_paths() {
        let report = MissingFileReport::new(vec![
            "csv_parser/build.zig".to_string(),
            "README.md".to_string(),
        ]);
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.lines(),
            vec![
                "ERROR: The following files are missing:",
                "  - csv_parser/build.zig",
                "  - README.md",
            ]
        );
    }
}

//! Per-tool invocation records.
//!
//! Each required tool is described by data: its executable name, the
//! minimum version, the arguments that make it print its version, and the
//! stream the version appears on. Adding a tool with an unusual version
//! convention means adding a record, not a branch.

use std::fmt;

use super::version::Version;

/// Which output stream of a tool carries its version text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStream {
    /// Standard output only.
    #[default]
    Stdout,
    /// Standard error only.
    Stderr,
    /// Standard output followed by standard error.
    Combined,
}

/// A required tool and how to ask it for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Executable name, resolved through the host PATH.
    pub name: String,
    /// Lowest acceptable version.
    pub min_version: Version,
    /// Arguments that make the tool print its version.
    pub version_args: Vec<String>,
    /// Stream to scan for the version.
    pub stream: OutputStream,
}

impl ToolSpec {
    /// A tool queried with `--version` on stdout.
    pub fn new(name: impl Into<String>, min_version: Version) -> Self {
        Self {
            name: name.into(),
            min_version,
            version_args: vec!["--version".to_string()],
            stream: OutputStream::Stdout,
        }
    }

    /// Replace the version-query arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.version_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Read the version from a different stream.
    pub fn with_stream(mut self, stream: OutputStream) -> Self {
        self.stream = stream;
        self
    }

    /// The full query command line, for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.version_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >= {}", self.name, self.min_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_long_version_flag_on_stdout() {
        let spec = ToolSpec::new("cmake", Version::new(3, 20, 8));
        assert_eq!(spec.version_args, vec!["--version"]);
        assert_eq!(spec.stream, OutputStream::Stdout);
    }

    #[test]
    fn with_args_replaces_query() {
        let spec = ToolSpec::new("zig", Version::new(0, 14, 0)).with_args(["version"]);
        assert_eq!(spec.version_args, vec!["version"]);
        assert_eq!(spec.command_line(), "zig version");
    }

    #[test]
    fn with_args_allows_empty_query() {
        let spec = ToolSpec::new("tool", Version::new(1, 0, 0)).with_args(Vec::<String>::new());
        assert!(spec.version_args.is_empty());
        assert_eq!(spec.command_line(), "tool");
    }

    #[test]
    fn with_stream_overrides_default() {
        let spec = ToolSpec::new("java", Version::new(17, 0, 0)).with_stream(OutputStream::Stderr);
        assert_eq!(spec.stream, OutputStream::Stderr);
    }

    #[test]
    fn display_shows_requirement() {
        let spec = ToolSpec::new("rustc", Version::new(1, 85, 0));
        assert_eq!(spec.to_string(), "rustc >= 1.85.0");
    }
}

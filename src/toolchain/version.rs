//! Dotted-triple versions and extraction from tool output.
//!
//! Extraction is a narrow textual scan: the first run of three
//! dot-separated integers anywhere in the output is the version. Tools
//! that print several triples (a build date, a bundled library version)
//! ahead of their own version will be misread; the record for such a tool
//! should query a stream or subcommand whose first triple is the right one.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// First `major.minor.patch` run in a string.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\.([0-9]+)\.([0-9]+)").expect("version pattern is valid")
});

/// A `major.minor.patch` version compared component-wise as integers.
///
/// Field order matters: the derived `Ord` compares major, then minor, then
/// patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this version is at least `minimum`.
    pub fn meets(&self, minimum: &Version) -> bool {
        self >= minimum
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Find the first dotted triple in `output`.
///
/// Returns `None` when there is no triple, or when the first one has a
/// component too large for `u64`.
pub fn extract_version(output: &str) -> Option<Version> {
    let caps = VERSION_REGEX.captures(output)?;
    let component = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
    Some(Version::new(component(1)?, component(2)?, component(3)?))
}

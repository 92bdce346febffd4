//! Regular-file checks over a manifest.

use std::path::{Path, PathBuf};

use super::report::MissingFileReport;

/// Checks a manifest of relative paths against a root directory.
#[derive(Debug, Clone)]
pub struct ManifestVerifier {
    root: PathBuf,
    files: Vec<String>,
}

impl ManifestVerifier {
    /// Create a verifier for `files`, resolved relative to `root`.
    pub fn new(root: &Path, files: Vec<String>) -> Self {
        Self {
            root: root.to_path_buf(),
            files,
        }
    }

    /// Get the root the manifest is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the manifest entries.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Whether a single manifest entry resolves to a regular file.
    ///
    /// Symlinks are followed, so a link to a file passes and a dangling
    /// link fails. Directories and special files fail.
    pub fn is_present(&self, relative: &str) -> bool {
        self.root.join(relative).is_file()
    }

    /// Check every entry and collect the missing ones in manifest order.
    pub fn verify(&self) -> MissingFileReport {
        let missing = self
            .files
            .iter()
            .filter(|path| {
                let present = self.is_present(path);
                if !present {
                    tracing::debug!("Missing: {}", self.root.join(path).display());
                }
                !present
            })
            .cloned()
            .collect();

        MissingFileReport::new(missing)
    }
}

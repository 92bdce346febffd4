//! Manifest completeness checking.
//!
//! The [`ManifestVerifier`] confirms that every path a build expects exists
//! as a regular file under a root directory, and reports the ones that do
//! not in manifest order.
//!
//! # Example
//!
//! ```
//! use buildgate::manifest::ManifestVerifier;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("a.txt"), "").unwrap();
//!
//! let verifier = ManifestVerifier::new(temp.path(), vec!["a.txt".into(), "b.txt".into()]);
//! let report = verifier.verify();
//! assert_eq!(report.missing(), ["b.txt".to_string()]);
//! ```

pub mod report;
pub mod verifier;

pub use report::MissingFileReport;
pub use verifier::ManifestVerifier;

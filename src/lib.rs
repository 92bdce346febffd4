//! buildgate - Pre-build environment checks.
//!
//! buildgate runs before a build to confirm that every file the build
//! expects is present and that every external toolchain program is
//! installed at or above its minimum version. It fails fast with a
//! line-oriented report when either is not the case.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Built-in requirements and the optional settings file
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Required-file verification
//! - [`toolchain`] - Tool version gating
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use buildgate::toolchain::{extract_version, Version};
//!
//! let found = extract_version("cmake version 3.27.1").unwrap();
//! assert!(found.meets(&Version::new(3, 20, 8)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod toolchain;
pub mod ui;

pub use error::{GateError, Result};

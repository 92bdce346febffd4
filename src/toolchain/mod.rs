//! Toolchain version gating.
//!
//! This module checks that the external programs a build needs are
//! installed at or above a minimum version.
//!
//! # Modules
//!
//! - [`spec`] - Per-tool invocation records
//! - [`version`] - Dotted-triple versions and extraction from tool output
//! - [`invoke`] - Running tools with a timeout and capturing output
//! - [`status`] - Per-tool outcomes and their report lines
//! - [`gate`] - The ordered, fail-fast gate itself
//!
//! # Example
//!
//! ```no_run
//! use buildgate::config::GateConfig;
//! use buildgate::toolchain::{SystemRunner, ToolchainGate};
//!
//! let config = GateConfig::builtin();
//! let gate = ToolchainGate::new(&config.tools, &SystemRunner);
//! let outcome = gate.run(|result| println!("{}", result.message()));
//! assert!(outcome.results.len() <= config.tools.len());
//! ```

pub mod gate;
pub mod invoke;
pub mod spec;
pub mod status;
pub mod version;

pub use gate::{GateOutcome, ToolchainGate};
pub use invoke::{InvokeError, SystemRunner, ToolOutput, ToolRunner};
pub use spec::{OutputStream, ToolSpec};
pub use status::{ToolCheckResult, ToolStatus};
pub use version::{extract_version, Version};

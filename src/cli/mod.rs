//! Command-line interface for buildgate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GateArgs, ToolsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

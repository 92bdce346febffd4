//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// buildgate - Pre-build checks for required files and toolchain versions.
#[derive(Debug, Parser)]
#[command(name = "buildgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides default .buildgate/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show problems
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check required files, then toolchain versions (default)
    Check(GateArgs),

    /// Check that every required file is present
    Files,

    /// Check installed toolchain versions
    Tools(ToolsArgs),

    /// List required files and tools without checking them
    List,
}

/// Options shared by commands that run the toolchain gate.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GateArgs {
    /// Fail when a tool is below its minimum version
    #[arg(long)]
    pub strict_versions: bool,

    /// Seconds to wait for each tool to report its version
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Arguments for the `tools` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToolsArgs {
    #[command(flatten)]
    pub gate: GateArgs,

    /// Check only these tools (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

//! Check command implementation.
//!
//! The `buildgate check` command (and bare `buildgate`) verifies the
//! manifest first. A missing file ends the run; otherwise the toolchain
//! gate runs.

use std::path::{Path, PathBuf};

use crate::cli::args::GateArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::toolchain::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::files::{check_manifest, MISSING_FILES_EXIT_CODE};
use super::tools::{check_toolchain, TOOLCHAIN_EXIT_CODE};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: GateConfig,
    args: GateArgs,
    runner: Box<dyn ToolRunner>,
}

impl CheckCommand {
    /// Create a new check command that runs real executables.
    pub fn new(project_root: &Path, config: GateConfig, args: GateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
            runner: Box::new(SystemRunner),
        }
    }

    /// Replace the tool runner.
    pub fn with_runner(mut self, runner: Box<dyn ToolRunner>) -> Self {
        self.runner = runner;
        self
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !check_manifest(&self.project_root, &self.config, ui) {
            tracing::debug!("Manifest incomplete, skipping toolchain checks");
            return Ok(CommandResult::failure(MISSING_FILES_EXIT_CODE));
        }

        let passed = check_toolchain(
            &self.config.tools,
            &self.config,
            &self.args,
            self.runner.as_ref(),
            ui,
        );

        if passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(TOOLCHAIN_EXIT_CODE))
        }
    }
}

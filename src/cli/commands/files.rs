//! Files command implementation.
//!
//! The `buildgate files` command checks the manifest and nothing else.

use std::path::{Path, PathBuf};

use crate::config::GateConfig;
use crate::error::Result;
use crate::manifest::{ManifestVerifier, MissingFileReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code when any required file is missing.
pub const MISSING_FILES_EXIT_CODE: i32 = 1;

/// The files command implementation.
pub struct FilesCommand {
    project_root: PathBuf,
    config: GateConfig,
}

impl FilesCommand {
    /// Create a new files command.
    pub fn new(project_root: &Path, config: GateConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }
}

impl Command for FilesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if check_manifest(&self.project_root, &self.config, ui) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(MISSING_FILES_EXIT_CODE))
        }
    }
}

/// Verify the manifest under `root` and print the report.
///
/// Returns whether every file was present.
pub fn check_manifest(root: &Path, config: &GateConfig, ui: &mut dyn UserInterface) -> bool {
    let verifier = ManifestVerifier::new(root, config.required_files.clone());
    ui.detail(&format!(
        "Checking {} required files under {}",
        verifier.files().len(),
        root.display()
    ));

    let report = verifier.verify();
    print_report(&report, ui);
    report.is_empty()
}

/// Print a missing-file report.
pub fn print_report(report: &MissingFileReport, ui: &mut dyn UserInterface) {
    for line in report.lines() {
        if report.is_empty() {
            ui.success(&line);
        } else {
            ui.failure(&line);
        }
    }
}

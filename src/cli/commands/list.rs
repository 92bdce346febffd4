//! List command implementation.
//!
//! The `buildgate list` command shows the manifest and tool requirements
//! without checking anything.

use crate::config::GateConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: GateConfig,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!(
            "Required files ({}):",
            self.config.required_files.len()
        ));
        for path in &self.config.required_files {
            ui.message(&format!("  {}", path));
        }

        ui.message(&format!("Required tools ({}):", self.config.tools.len()));
        for tool in &self.config.tools {
            ui.message(&format!("  {}  ({})", tool, tool.command_line()));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_files_then_tools() {
        let mut ui = MockUI::new();
        let result = ListCommand::new(GateConfig::builtin())
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);

        let lines = ui.lines();
        assert_eq!(lines[0], "Required files (46):");
        assert_eq!(lines[1], "  ai_engine/includes/data/csv.hpp");
        assert!(lines.contains(&"Required tools (4):"));
        assert!(lines.contains(&"  zig >= 0.14.0  (zig version)"));
        assert!(lines.contains(&"  cmake >= 3.20.8  (cmake --version)"));
    }
}

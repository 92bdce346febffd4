//! Tools command implementation.
//!
//! The `buildgate tools` command runs the toolchain gate and nothing else.

use crate::cli::args::{GateArgs, ToolsArgs};
use crate::config::{GateConfig, VersionPolicy};
use crate::error::{GateError, Result};
use crate::toolchain::{
    GateOutcome, SystemRunner, ToolCheckResult, ToolRunner, ToolSpec, ToolStatus, ToolchainGate,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code when the toolchain gate fails.
pub const TOOLCHAIN_EXIT_CODE: i32 = 1;

/// The tools command implementation.
pub struct ToolsCommand {
    config: GateConfig,
    args: ToolsArgs,
    runner: Box<dyn ToolRunner>,
}

impl ToolsCommand {
    /// Create a new tools command that runs real executables.
    pub fn new(config: GateConfig, args: ToolsArgs) -> Self {
        Self {
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

    /// The tools selected by `--only`, in configured order.
    fn selected_tools(&self) -> Result<Vec<ToolSpec>> {
        if self.args.only.is_empty() {
            return Ok(self.config.tools.clone());
        }

        if let Some(unknown) = self
            .args
            .only
            .iter()
            .find(|name| !self.config.tools.iter().any(|t| &t.name == *name))
        {
            return Err(GateError::UnknownTool {
                name: unknown.clone(),
            });
        }

        Ok(self
            .config
            .tools
            .iter()
            .filter(|t| self.args.only.contains(&t.name))
            .cloned()
            .collect())
    }
}

impl Command for ToolsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools = self.selected_tools()?;
        let passed = check_toolchain(
            &tools,
            &self.config,
            &self.args.gate,
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

/// The version policy in effect, with `--strict-versions` taking precedence.
pub fn effective_policy(config: &GateConfig, args: &GateArgs) -> VersionPolicy {
    if args.strict_versions {
        VersionPolicy::Fail
    } else {
        config.settings.version_policy
    }
}

/// Run the gate over `tools`, printing each result as it completes.
///
/// Returns whether the run passes under the effective version policy.
pub fn check_toolchain(
    tools: &[ToolSpec],
    config: &GateConfig,
    args: &GateArgs,
    runner: &dyn ToolRunner,
    ui: &mut dyn UserInterface,
) -> bool {
    let timeout = args
        .timeout
        .map(std::time::Duration::from_secs)
        .unwrap_or_else(|| config.settings.timeout());
    let policy = effective_policy(config, args);

    let gate = ToolchainGate::new(tools, runner).with_timeout(Some(timeout));
    let outcome = gate.run(|result| print_result(result, ui));
    print_summary(&outcome, tools.len(), ui);

    let passed = outcome.passed(policy);
    if !passed && !outcome.aborted {
        tracing::debug!("Failing run: tools below minimum under {:?} policy", policy);
    }
    passed
}

/// Print the report line for one tool.
pub fn print_result(result: &ToolCheckResult, ui: &mut dyn UserInterface) {
    let line = result.message();
    match result.status {
        ToolStatus::Met { .. } => ui.success(&line),
        ToolStatus::NotFound => ui.failure(&line),
        ToolStatus::Unmet { .. } | ToolStatus::Unparsable | ToolStatus::InvocationError { .. } => {
            ui.warning(&line)
        }
    }
}

fn print_summary(outcome: &GateOutcome, total: usize, ui: &mut dyn UserInterface) {
    ui.detail(&format!(
        "{} of {} tools meet their minimum version",
        outcome.met_count(),
        total
    ));
    if outcome.aborted {
        let skipped = total - outcome.results.len();
        ui.detail(&format!("Stopped early, skipped {} remaining tool(s)", skipped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::{extract_version, InvokeError, ToolOutput};
    use crate::ui::{LineKind, MockUI};
    use std::collections::HashMap;
    use std::time::Duration;

    /// Canned stdout per program; anything else is not on PATH.
    struct FakeRunner(HashMap<&'static str, &'static str>);

    impl ToolRunner for FakeRunner {
        fn run(
            &self,
            program: &str,
            _args: &[String],
            _timeout: Option<Duration>,
        ) -> std::result::Result<ToolOutput, InvokeError> {
            self.0
                .get(program)
                .map(|out| ToolOutput::success(*out))
                .ok_or(InvokeError::NotFound)
        }
    }

    fn runner(entries: &[(&'static str, &'static str)]) -> Box<dyn ToolRunner> {
        Box::new(FakeRunner(entries.iter().copied().collect()))
    }

    fn config(tools: &[(&str, &str)]) -> GateConfig {
        let mut config = GateConfig::builtin();
        config.tools = tools
            .iter()
            .map(|(name, min)| ToolSpec::new(*name, extract_version(min).unwrap()))
            .collect();
        config
    }

    #[test]
    fn all_met_passes() {
        let cmd = ToolsCommand::new(config(&[("cmake", "3.20.8")]), ToolsArgs::default())
            .with_runner(runner(&[("cmake", "cmake version 3.20.8")]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(
            ui.successes(),
            vec!["cmake is version 3.20.8, which meets or exceeds 3.20.8"]
        );
    }

    #[test]
    fn unmet_is_reported_but_passes_by_default() {
        let cmd = ToolsCommand::new(
            config(&[("rustc", "1.85.0"), ("ninja", "1.12.1")]),
            ToolsArgs::default(),
        )
        .with_runner(runner(&[("rustc", "rustc 1.80.0"), ("ninja", "1.12.1")]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(
            ui.lines(),
            vec![
                "rustc version 1.80.0 is lower than the expected 1.85.0",
                "ninja is version 1.12.1, which meets or exceeds 1.12.1",
            ]
        );
    }

    #[test]
    fn strict_versions_fails_on_unmet() {
        let args = ToolsArgs {
            gate: GateArgs {
                strict_versions: true,
                timeout: None,
            },
            only: Vec::new(),
        };
        let cmd = ToolsCommand::new(config(&[("rustc", "1.85.0")]), args)
            .with_runner(runner(&[("rustc", "rustc 1.80.0")]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, TOOLCHAIN_EXIT_CODE);
    }

    #[test]
    fn settings_policy_fail_fails_on_unmet() {
        let mut cfg = config(&[("rustc", "1.85.0")]);
        cfg.settings.version_policy = VersionPolicy::Fail;
        let cmd = ToolsCommand::new(cfg, ToolsArgs::default())
            .with_runner(runner(&[("rustc", "rustc 1.80.0")]));
        let mut ui = MockUI::new();

        assert!(!cmd.execute(&mut ui).unwrap().success);
    }

    #[test]
    fn not_found_fails_and_stops() {
        let cmd = ToolsCommand::new(
            config(&[("zig", "0.14.0"), ("rustc", "1.85.0")]),
            ToolsArgs::default(),
        )
        .with_runner(runner(&[("rustc", "rustc 1.85.0")]));
        let mut ui = MockUI::with_mode(crate::ui::OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, TOOLCHAIN_EXIT_CODE);
        assert_eq!(
            ui.lines(),
            vec!["zig is not installed or not in the PATH."]
        );
        assert!(ui
            .captured()
            .iter()
            .any(|(kind, line)| *kind == LineKind::Detail && line.contains("skipped 1 remaining tool(s)")));
    }

    #[test]
    fn unparsable_is_a_warning_and_passes() {
        let cmd = ToolsCommand::new(config(&[("ninja", "1.12.1")]), ToolsArgs::default())
            .with_runner(runner(&[("ninja", "ninja")]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.warnings(), vec!["Could not determine ninja version."]);
    }

    #[test]
    fn only_restricts_tools_in_configured_order() {
        let args = ToolsArgs {
            gate: GateArgs::default(),
            only: vec!["rustc".to_string(), "cmake".to_string()],
        };
        let cmd = ToolsCommand::new(
            config(&[("cmake", "3.20.8"), ("zig", "0.14.0"), ("rustc", "1.85.0")]),
            args,
        )
        .with_runner(runner(&[("cmake", "3.30.0"), ("rustc", "1.90.0")]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        let lines = ui.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("cmake"));
        assert!(lines[1].starts_with("rustc"));
    }

    #[test]
    fn only_with_unknown_tool_is_an_error() {
        let args = ToolsArgs {
            gate: GateArgs::default(),
            only: vec!["gcc".to_string()],
        };
        let cmd = ToolsCommand::new(config(&[("cmake", "3.20.8")]), args);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, GateError::UnknownTool { name } if name == "gcc"));
    }

    #[test]
    fn effective_policy_prefers_flag() {
        let cfg = GateConfig::builtin();
        assert_eq!(
            effective_policy(&cfg, &GateArgs::default()),
            VersionPolicy::Report
        );
        let strict = GateArgs {
            strict_versions: true,
            timeout: None,
        };
        assert_eq!(effective_policy(&cfg, &strict), VersionPolicy::Fail);
    }
}

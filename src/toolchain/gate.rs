//! The toolchain version gate.
//!
//! The [`ToolchainGate`] checks each required tool in order, handing every
//! result to a callback as soon as it is known, and stops at the first tool
//! that is not on the PATH.

use std::time::Duration;

use crate::config::VersionPolicy;

use super::invoke::{InvokeError, ToolRunner};
use super::spec::ToolSpec;
use super::status::{ToolCheckResult, ToolStatus};
use super::version::extract_version;

/// Checks installed tools against their minimum versions.
pub struct ToolchainGate<'a> {
    tools: &'a [ToolSpec],
    runner: &'a dyn ToolRunner,
    timeout: Option<Duration>,
}

impl<'a> ToolchainGate<'a> {
    /// Create a gate over `tools`, invoking them through `runner`.
    pub fn new(tools: &'a [ToolSpec], runner: &'a dyn ToolRunner) -> Self {
        Self {
            tools,
            runner,
            timeout: None,
        }
    }

    /// Bound each tool invocation by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check a single tool.
    pub fn check_tool(&self, spec: &ToolSpec) -> ToolCheckResult {
        tracing::debug!("Checking {} with `{}`", spec.name, spec.command_line());

        let status = match self.runner.run(&spec.name, &spec.version_args, self.timeout) {
            Ok(output) if output.success => {
                let text = output.text(spec.stream);
                match extract_version(text.trim()) {
                    Some(detected) if detected.meets(&spec.min_version) => {
                        ToolStatus::Met { detected }
                    }
                    Some(detected) => ToolStatus::Unmet { detected },
                    None => {
                        tracing::debug!("No version in {} output: {:?}", spec.name, text);
                        ToolStatus::Unparsable
                    }
                }
            }
            Ok(output) => {
                let exit = match output.exit_code {
                    Some(code) => format!("exited with status {}", code),
                    None => "was terminated by a signal".to_string(),
                };
                let mut message = format!("`{}` {}", spec.command_line(), exit);
                if let Some(line) = output.stderr.lines().find(|l| !l.trim().is_empty()) {
                    message.push_str(": ");
                    message.push_str(line.trim());
                }
                ToolStatus::InvocationError { message }
            }
            Err(InvokeError::NotFound) => ToolStatus::NotFound,
            Err(e @ InvokeError::TimedOut { .. }) => ToolStatus::InvocationError {
                message: format!("`{}` {}", spec.command_line(), e),
            },
            Err(InvokeError::Io(e)) => ToolStatus::InvocationError {
                message: format!("failed to run `{}`: {}", spec.command_line(), e),
            },
        };

        ToolCheckResult {
            tool: spec.name.clone(),
            required: spec.min_version,
            status,
        }
    }

    /// Check every tool in order, calling `on_result` after each one.
    ///
    /// Stops after the first [`ToolStatus::NotFound`]; the remaining tools
    /// are not invoked.
    pub fn run<F>(&self, mut on_result: F) -> GateOutcome
    where
        F: FnMut(&ToolCheckResult),
    {
        let mut results = Vec::with_capacity(self.tools.len());
        let mut aborted = false;

        for spec in self.tools {
            let result = self.check_tool(spec);
            on_result(&result);
            let fatal = result.status.is_fatal();
            results.push(result);
            if fatal {
                tracing::debug!("{} not found, skipping remaining tools", spec.name);
                aborted = true;
                break;
            }
        }

        GateOutcome { results, aborted }
    }
}

/// The results of one gate run.
#[derive(Debug, Clone, Default)]
pub struct GateOutcome {
    /// Results in check order.
    pub results: Vec<ToolCheckResult>,
    /// Whether a missing tool stopped the run early.
    pub aborted: bool,
}

impl GateOutcome {
    /// Whether any checked tool is below its minimum version.
    pub fn has_unmet(&self) -> bool {
        self.results
            .iter()
            .any(|r| matches!(r.status, ToolStatus::Unmet { .. }))
    }

    /// Number of tools that meet their requirement.
    pub fn met_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_met()).count()
    }

    /// Whether the run passes under `policy`.
    ///
    /// A missing tool always fails. Unparsable output and invocation errors
    /// never do. Versions below minimum fail only under
    /// [`VersionPolicy::Fail`].
    pub fn passed(&self, policy: VersionPolicy) -> bool {
        if self.aborted {
            return false;
        }
        match policy {
            VersionPolicy::Report => true,
            VersionPolicy::Fail => !self.has_unmet(),
        }
    }
}

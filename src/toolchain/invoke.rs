//! Running a tool to ask for its version.
//!
//! [`ToolRunner`] is the seam between the gate and the host: the gate only
//! sees captured text and an exit status, so tests can substitute canned
//! output for real executables.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use super::spec::OutputStream;

/// How often a running tool is polled for exit while a timeout is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long to wait for pipe readers to finish after a tool is killed.
const RELEASE_GRACE: Duration = Duration::from_secs(1);

/// Captured result of a tool invocation that ran to completion.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, decoded lossily as UTF-8.
    pub stdout: String,

    /// Standard error, decoded lossily as UTF-8.
    pub stderr: String,

    /// Whether the tool exited with status 0.
    pub success: bool,
}

impl ToolOutput {
    /// A successful invocation that printed `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// A failed invocation.
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// Text of the requested stream.
    pub fn text(&self, stream: OutputStream) -> String {
        match stream {
            OutputStream::Stdout => self.stdout.clone(),
            OutputStream::Stderr => self.stderr.clone(),
            OutputStream::Combined => format!("{}{}", self.stdout, self.stderr),
        }
    }
}

/// Why a tool could not produce output.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// No executable by that name on the search path.
    #[error("not found on PATH")]
    NotFound,

    /// The tool, or a process holding its output open, did not finish
    /// within the allowed time and was killed.
    #[error("timed out after {}s", .after.as_secs_f64())]
    TimedOut { after: Duration },

    /// The executable exists but could not be started or waited on.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Runs tools and captures their output.
pub trait ToolRunner {
    /// Run `program` with `args`, waiting at most `timeout` if one is given.
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<ToolOutput, InvokeError>;
}

/// Runs real executables resolved through the host PATH.
///
/// On unix each tool is started in its own process group, so a timeout
/// also terminates any background processes it left holding the pipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<ToolOutput, InvokeError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InvokeError::NotFound
            } else {
                InvokeError::Io(e)
            }
        })?;

        // A timeout too large to represent as an instant is no timeout.
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));
        let timed_out = || InvokeError::TimedOut {
            after: timeout.unwrap_or_default(),
        };

        // Drain both pipes concurrently so a tool filling one of them cannot
        // block while we wait on it.
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        let status = match wait_until(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                tracing::debug!("{} killed after timeout", program);
                terminate(&mut child);
                release(&stdout, &stderr);
                return Err(timed_out());
            }
            Err(e) => {
                terminate(&mut child);
                release(&stdout, &stderr);
                return Err(InvokeError::Io(e));
            }
        };

        // The tool has exited, but a descendant may still hold its pipes.
        let (Some(out), Some(err)) = (collect(&stdout, deadline), collect(&stderr, deadline))
        else {
            tracing::debug!("{} left its output open past the timeout", program);
            kill_group(&child);
            release(&stdout, &stderr);
            return Err(timed_out());
        };

        Ok(ToolOutput {
            exit_code: status.code(),
            stdout: out,
            stderr: err,
            success: status.success(),
        })
    }
}

/// Wait for `child` to exit, polling until `deadline` if one is set.
///
/// Returns `Ok(None)` if the deadline passed first; the child is still
/// running in that case.
fn wait_until(
    child: &mut Child,
    deadline: Option<Instant>,
) -> std::io::Result<Option<ExitStatus>> {
    let Some(deadline) = deadline else {
        return child.wait().map(Some);
    };

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Kill the tool and everything in its process group, then reap it.
fn terminate(child: &mut Child) {
    kill_group(child);
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(unix)]
fn kill_group(child: &Child) {
    let Ok(pgid) = libc::pid_t::try_from(child.id()) else {
        return;
    };
    // SAFETY: kill() only sends a signal. The group id is the tool's pid,
    // which cannot be reused while any member of the group is alive.
    unsafe {
        libc::kill(-pgid, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_group(_child: &Child) {}

/// Wait briefly for the readers to see end-of-file once the tool's
/// processes are gone, so their pipe handles are closed before returning.
fn release(stdout: &Receiver<Vec<u8>>, stderr: &Receiver<Vec<u8>>) {
    let deadline = Instant::now().checked_add(RELEASE_GRACE);
    let _ = collect(stdout, deadline);
    let _ = collect(stderr, deadline);
}

fn spawn_reader<R>(pipe: Option<R>) -> Receiver<Vec<u8>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    match pipe {
        Some(mut pipe) => {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = pipe.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        }
        None => {
            let _ = tx.send(Vec::new());
        }
    }
    rx
}

/// Receive a reader's bytes, or `None` if `deadline` passes first.
fn collect(rx: &Receiver<Vec<u8>>, deadline: Option<Instant>) -> Option<String> {
    let received = match deadline {
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
    };
    match received {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

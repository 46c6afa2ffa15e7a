//! External tool execution under a shared deadline.
//!
//! A tool that exits non-zero or cannot be launched is reported as a failed
//! `ToolOutcome`, never as an error. The only error is deadline expiry, which
//! kills the child and aborts the pass.

use super::registry::ToolSpec;
use super::result::ToolOutcome;
use crate::error::{LintgateError, Result};
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long to wait for pipe readers once the tool itself has exited.
const READER_GRACE: Duration = Duration::from_millis(250);

/// Size of each chunk sent by a pipe reader.
const READ_CHUNK: usize = 8192;

/// A single end-to-end deadline shared by every tool in a pass.
///
/// The first runner to see it expire cancels it, so siblings stop promptly
/// even if their own poll has not reached the expiry instant yet.
#[derive(Debug)]
pub struct Deadline {
    timeout: Duration,
    /// `None` when the timeout is too large to represent as an instant.
    expires_at: Option<Instant>,
    cancelled: AtomicBool,
}

impl Deadline {
    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            timeout,
            expires_at: Instant::now().checked_add(timeout),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Time left before expiry; zero once expired or cancelled.
    pub fn remaining(&self) -> Duration {
        if self.is_cancelled() {
            return Duration::ZERO;
        }
        match self.expires_at {
            Some(at) => at.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether work under this deadline must stop.
    pub fn is_expired(&self) -> bool {
        self.is_cancelled() || self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    /// Stop all work under this deadline.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// `Err(DeadlineExceeded)` if expired, cancelling it for everyone else.
    pub fn check(&self) -> Result<()> {
        if self.is_expired() {
            self.cancel();
            return Err(self.exceeded());
        }
        Ok(())
    }

    fn exceeded(&self) -> LintgateError {
        LintgateError::DeadlineExceeded(self.timeout)
    }
}

/// How a tool process ended.
enum Exit {
    /// The process ran to completion.
    Finished { code: i32, output: String },
    /// The process could not be started.
    LaunchFailed(std::io::Error),
}

/// Run a linter against the staged file.
pub fn run_linter(tool: &ToolSpec, staged: &Path, deadline: &Deadline) -> Result<ToolOutcome> {
    let outcome = match execute(tool, staged, deadline)? {
        Exit::Finished { code: 0, output } => ToolOutcome {
            name: tool.name.clone(),
            passed: true,
            output,
            failure: None,
        },
        Exit::Finished { code, output } => ToolOutcome {
            name: tool.name.clone(),
            passed: false,
            output,
            failure: Some(format!("{} exited with code {}", tool.name, code)),
        },
        Exit::LaunchFailed(e) => ToolOutcome {
            name: tool.name.clone(),
            passed: false,
            output: String::new(),
            failure: Some(format!("failed to run {}: {}", tool.name, e)),
        },
    };

    Ok(outcome)
}

/// Run a formatter against the staged file.
///
/// Returns a warning message if the formatter failed; the staged file is
/// left as the formatter left it.
pub fn run_formatter(
    tool: &ToolSpec,
    staged: &Path,
    deadline: &Deadline,
) -> Result<Option<String>> {
    let warning = match execute(tool, staged, deadline)? {
        Exit::Finished { code: 0, .. } => None,
        Exit::Finished { code, output } if output.is_empty() => {
            Some(format!("{} formatting failed: exit code {}", tool.name, code))
        }
        Exit::Finished { code, output } => Some(format!(
            "{} formatting failed: exit code {}: {}",
            tool.name, code, output
        )),
        Exit::LaunchFailed(e) => Some(format!("{} formatting failed: {}", tool.name, e)),
    };

    Ok(warning)
}

fn execute(tool: &ToolSpec, staged: &Path, deadline: &Deadline) -> Result<Exit> {
    deadline.check()?;

    let args = tool.args_for(staged);
    log::debug!("running {}: {} {}", tool.name, tool.program, args.join(" "));

    let start = Instant::now();
    let mut child = match Command::new(&tool.program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log::debug!("{} could not be launched: {}", tool.name, e);
            return Ok(Exit::LaunchFailed(e));
        }
    };

    // Drain both pipes concurrently so a chatty tool cannot block on a full pipe.
    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let code = wait_with_deadline(&mut child, deadline)?;
    let grace_until = Instant::now() + READER_GRACE.min(deadline.remaining());
    let stdout = collect(&tool.name, stdout, grace_until);
    let stderr = collect(&tool.name, stderr, grace_until);

    log::debug!(
        "{} exited with code {} after {}ms",
        tool.name,
        code,
        start.elapsed().as_millis()
    );

    Ok(Exit::Finished {
        code,
        output: combine_output(&stdout, &stderr),
    })
}

/// Wait for a child to exit, killing it if the deadline expires first.
///
/// Returns the exit code; death by signal is reported as -1.
fn wait_with_deadline(child: &mut Child, deadline: &Deadline) -> Result<i32> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status.code().unwrap_or(-1)),
            Ok(None) => {
                if let Err(e) = deadline.check() {
                    kill_process(child);
                    return Err(e);
                }
                thread::sleep(POLL_INTERVAL.min(deadline.remaining()));
            }
            Err(e) => {
                kill_process(child);
                return Err(LintgateError::Io(format!(
                    "failed to check process status: {}",
                    e
                )));
            }
        }
    }
}

/// Kill a process and reap it.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = vec![0; READ_CHUNK];
        loop {
            match pipe.read(&mut buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

/// Gather a reader's output after the tool exited, stopping at `until`.
///
/// A grandchild that inherited the pipe can keep it open after the tool
/// itself exited. Whatever arrived by `until` is kept and the reader thread
/// is abandoned; the tool's result stands.
fn collect(name: &str, rx: Option<Receiver<Vec<u8>>>, until: Instant) -> Vec<u8> {
    let mut output = Vec::new();
    let Some(rx) = rx else {
        return output;
    };

    loop {
        match rx.recv_timeout(until.saturating_duration_since(Instant::now())) {
            Ok(chunk) => output.extend_from_slice(&chunk),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                log::debug!("{} exited but its output pipe is still open", name);
                break;
            }
        }
    }
    output
}

fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let combined = format!(
        "{}\n{}",
        String::from_utf8_lossy(stdout),
        String::from_utf8_lossy(stderr)
    );
    combined.trim().to_string()
}

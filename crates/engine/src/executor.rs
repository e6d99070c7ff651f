// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Supervised hook subprocess execution.

use crate::context::ExecutionContext;
use crate::definition::HookDefinition;
use crate::result::{ExecutionResult, HookOutcome};
use chrono::{DateTime, Utc};
use std::process::Stdio;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Default bound on captured stdout/stderr tails.
pub const DEFAULT_TAIL_LIMIT: usize = 64 * 1024;

/// Hard failures the engine propagates to the host. Everything a hook does
/// wrong (nonzero exit, timeout, missing interpreter) is recorded in its
/// [`ExecutionResult`] instead.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("cannot spawn hook {hook}: {message}")]
    Spawn { hook: String, message: String },
}

/// Runs hook commands as time-bounded child processes.
#[derive(Clone, Debug)]
pub struct HookExecutor {
    tail_limit: usize,
}

impl HookExecutor {
    /// Create an executor with the default tail bound.
    pub fn new() -> Self {
        Self {
            tail_limit: DEFAULT_TAIL_LIMIT,
        }
    }

    /// Set the maximum number of bytes kept from each captured stream.
    pub fn with_tail_limit(mut self, limit: usize) -> Self {
        self.tail_limit = limit;
        self
    }

    /// Run one hook to completion or timeout.
    ///
    /// The command line is handed to the shell in the context's working
    /// directory, with the inherited environment overlaid by the hook
    /// contract variables. The child gets its own process group; on timeout
    /// the whole group is terminated, because hook bodies are untrusted and
    /// may have forked.
    ///
    /// Interactive hooks inherit the controlling terminal's stdio and
    /// produce empty tails; the wall-clock timeout still applies.
    pub async fn run(
        &self,
        hook: &HookDefinition,
        ctx: &ExecutionContext,
    ) -> Result<ExecutionResult, HookError> {
        let started_at = Utc::now();
        let start = Instant::now();

        let mut command = Command::new("/bin/bash");
        command
            .arg("-c")
            .arg(&hook.command)
            .current_dir(&ctx.working_dir)
            .envs(ctx.hook_env(&hook.name))
            .kill_on_drop(true);

        if hook.interactive {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }

        #[cfg(unix)]
        command.process_group(0);

        debug!(hook = %hook.name, command = %hook.command, "spawning hook");
        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::OutOfMemory | std::io::ErrorKind::WouldBlock
                ) {
                    return Err(HookError::Spawn {
                        hook: hook.name.clone(),
                        message: err.to_string(),
                    });
                }
                warn!(hook = %hook.name, %err, "hook failed to spawn");
                return Ok(self.failure_result(hook, started_at, start, err.to_string()));
            }
        };
        let pid = child.id();

        if hook.interactive {
            match tokio::time::timeout(hook.timeout, child.wait()).await {
                Ok(Ok(status)) => Ok(self.classify(
                    hook,
                    started_at,
                    start,
                    status.code(),
                    String::new(),
                    String::new(),
                )),
                Ok(Err(err)) => {
                    warn!(hook = %hook.name, %err, "error waiting for interactive hook");
                    Ok(self.failure_result(hook, started_at, start, err.to_string()))
                }
                Err(_) => {
                    kill_process_group(pid);
                    let _ = child.wait().await;
                    Ok(self.timed_out_result(hook, started_at, start))
                }
            }
        } else {
            match tokio::time::timeout(hook.timeout, child.wait_with_output()).await {
                Ok(Ok(output)) => Ok(self.classify(
                    hook,
                    started_at,
                    start,
                    output.status.code(),
                    self.tail(&output.stdout),
                    self.tail(&output.stderr),
                )),
                Ok(Err(err)) => {
                    warn!(hook = %hook.name, %err, "error collecting hook output");
                    Ok(self.failure_result(hook, started_at, start, err.to_string()))
                }
                Err(_) => {
                    // The wait future owned the child; dropping it fires
                    // kill_on_drop for the direct child, and the group kill
                    // sweeps up anything it forked.
                    kill_process_group(pid);
                    Ok(self.timed_out_result(hook, started_at, start))
                }
            }
        }
    }

    fn classify(
        &self,
        hook: &HookDefinition,
        started_at: DateTime<Utc>,
        start: Instant,
        exit_code: Option<i32>,
        stdout_tail: String,
        stderr_tail: String,
    ) -> ExecutionResult {
        let outcome = match exit_code {
            Some(0) => HookOutcome::Success,
            Some(2) => HookOutcome::Skipped,
            code => {
                warn!(hook = %hook.name, ?code, "hook exited with failure");
                failure_outcome(hook)
            }
        };
        ExecutionResult {
            hook_name: hook.name.clone(),
            exit_code,
            timed_out: false,
            duration_ms: start.elapsed().as_millis() as u64,
            started_at,
            stdout_tail,
            stderr_tail,
            outcome,
        }
    }

    fn failure_result(
        &self,
        hook: &HookDefinition,
        started_at: DateTime<Utc>,
        start: Instant,
        message: String,
    ) -> ExecutionResult {
        ExecutionResult {
            hook_name: hook.name.clone(),
            exit_code: None,
            timed_out: false,
            duration_ms: start.elapsed().as_millis() as u64,
            started_at,
            stdout_tail: String::new(),
            stderr_tail: message,
            outcome: failure_outcome(hook),
        }
    }

    fn timed_out_result(
        &self,
        hook: &HookDefinition,
        started_at: DateTime<Utc>,
        start: Instant,
    ) -> ExecutionResult {
        warn!(hook = %hook.name, timeout = ?hook.timeout, "hook timed out, process group terminated");
        ExecutionResult {
            hook_name: hook.name.clone(),
            exit_code: None,
            timed_out: true,
            duration_ms: start.elapsed().as_millis() as u64,
            started_at,
            stdout_tail: String::new(),
            stderr_tail: String::new(),
            outcome: HookOutcome::TimedOut,
        }
    }

    /// Last `tail_limit` bytes of a captured stream, lossily decoded.
    fn tail(&self, bytes: &[u8]) -> String {
        let start = bytes.len().saturating_sub(self.tail_limit);
        String::from_utf8_lossy(&bytes[start..]).into_owned()
    }
}

impl Default for HookExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// A nonzero exit vetoes the guarded action only for blocking event kinds,
/// and only when the hook has not opted into advisory semantics.
fn failure_outcome(hook: &HookDefinition) -> HookOutcome {
    if hook.event.is_blocking() && !hook.advisory {
        HookOutcome::Aborted
    } else {
        HookOutcome::Warning
    }
}

#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    if let Some(pid) = pid {
        if let Err(err) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            warn!(%pid, %err, "failed to kill hook process group");
        }
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

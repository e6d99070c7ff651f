// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution results and dispatch outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome classification for one hook run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookOutcome {
    /// Exit code 0
    Success,
    /// Nonzero exit on a non-vetoing hook; surfaced for the host to log
    Warning,
    /// Exit code 2: the hook decided at runtime it did not apply
    Skipped,
    /// Nonzero exit on a vetoing hook; the guarded action must not run
    Aborted,
    /// Watchdog expired and the process group was terminated
    TimedOut,
}

impl HookOutcome {
    /// Whether this outcome satisfies hooks that depend on the producing
    /// hook. Skipped is neutral: it never blocks dependents.
    pub fn satisfies_dependents(&self) -> bool {
        matches!(self, HookOutcome::Success | HookOutcome::Skipped)
    }
}

impl std::fmt::Display for HookOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HookOutcome::Success => "success",
            HookOutcome::Warning => "warning",
            HookOutcome::Skipped => "skipped",
            HookOutcome::Aborted => "aborted",
            HookOutcome::TimedOut => "timed_out",
        })
    }
}

/// Result of one supervised hook run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Hook that produced this result
    pub hook_name: String,

    /// Exit code; None when the process was killed
    pub exit_code: Option<i32>,

    /// Whether the watchdog expired
    pub timed_out: bool,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Bounded tail of captured stdout (empty for interactive hooks)
    pub stdout_tail: String,

    /// Bounded tail of captured stderr (empty for interactive hooks)
    pub stderr_tail: String,

    /// Outcome classification
    pub outcome: HookOutcome,
}

/// Aggregate decision communicated to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The guarded host action may proceed
    Proceed,
    /// A vetoing hook failed; the host must not perform the action
    Block,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Verdict::Proceed => "proceed",
            Verdict::Block => "block",
        })
    }
}

/// Everything one dispatch produced: per-hook results in execution order
/// plus the aggregate verdict.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    /// Results for hooks that actually executed, in execution order
    pub results: Vec<ExecutionResult>,

    /// Aggregate proceed/block decision
    pub verdict: Verdict,
}

impl DispatchOutcome {
    /// The result that vetoed the action, if the verdict is Block. The
    /// dispatch stops at the veto, so it is always the last result.
    pub fn blocked_by(&self) -> Option<&ExecutionResult> {
        if self.verdict != Verdict::Block {
            return None;
        }
        self.results
            .last()
            .filter(|r| r.outcome == HookOutcome::Aborted || r.timed_out)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn result(name: &str, outcome: HookOutcome, timed_out: bool) -> ExecutionResult {
    ExecutionResult {
        hook_name: name.to_string(),
        exit_code: None,
        timed_out,
        duration_ms: 1,
        started_at: Utc::now(),
        stdout_tail: String::new(),
        stderr_tail: String::new(),
        outcome,
    }
}

#[test]
fn test_satisfies_dependents() {
    assert!(HookOutcome::Success.satisfies_dependents());
    assert!(HookOutcome::Skipped.satisfies_dependents());
    assert!(!HookOutcome::Warning.satisfies_dependents());
    assert!(!HookOutcome::Aborted.satisfies_dependents());
    assert!(!HookOutcome::TimedOut.satisfies_dependents());
}

#[test]
fn test_blocked_by_none_on_proceed() {
    let outcome = DispatchOutcome {
        results: vec![result("a", HookOutcome::Warning, false)],
        verdict: Verdict::Proceed,
    };
    assert!(outcome.blocked_by().is_none());
}

#[test]
fn test_blocked_by_finds_aborted_result() {
    let outcome = DispatchOutcome {
        results: vec![
            result("a", HookOutcome::Success, false),
            result("b", HookOutcome::Aborted, false),
        ],
        verdict: Verdict::Block,
    };
    assert_eq!(outcome.blocked_by().map(|r| r.hook_name.as_str()), Some("b"));
}

#[test]
fn test_blocked_by_finds_timed_out_result() {
    let outcome = DispatchOutcome {
        results: vec![result("slow", HookOutcome::TimedOut, true)],
        verdict: Verdict::Block,
    };
    assert_eq!(
        outcome.blocked_by().map(|r| r.hook_name.as_str()),
        Some("slow")
    );
}

#[test]
fn test_outcome_serializes_snake_case() {
    let json = serde_json::to_string(&HookOutcome::TimedOut).unwrap();
    assert_eq!(json, r#""timed_out""#);
}

#[test]
fn test_result_serializes_camel_case() {
    let json = serde_json::to_value(result("a", HookOutcome::Success, false)).unwrap();
    assert!(json.get("hookName").is_some());
    assert!(json.get("durationMs").is_some());
    assert!(json.get("stdoutTail").is_some());
}

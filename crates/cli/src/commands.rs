// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations for validate and dispatch.

use hookrun_engine::{
    load_hooks_file, Dispatcher, ExecutionContext, EventKind, HookRegistry, Verdict,
};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Exit codes shared by both subcommands.
pub mod exit_codes {
    /// Clean run: validation passed, or dispatch verdict was proceed
    pub const SUCCESS: i32 = 0;
    /// Errors found, or dispatch verdict was block
    pub const ERROR: i32 = 1;
    /// Validation passed with warnings only
    pub const WARNINGS: i32 = 2;
}

/// Validate a hooks file: loader checks plus full registry construction.
pub fn validate(file: &Path, hook_name: Option<&str>) -> i32 {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match load_hooks_file(file) {
        Ok((definitions, load_warnings)) => {
            warnings.extend(load_warnings);

            if let Some(name) = hook_name {
                if !definitions.iter().any(|h| h.name == name) {
                    errors.push(format!("no hook named '{}' in {}", name, file.display()));
                }
            }

            if let Err(err) = HookRegistry::load(definitions) {
                errors.push(err.to_string());
            }
        }
        Err(err) => errors.push(err.to_string()),
    }

    print_report(&errors, &warnings);
    if !errors.is_empty() {
        exit_codes::ERROR
    } else if !warnings.is_empty() {
        exit_codes::WARNINGS
    } else {
        exit_codes::SUCCESS
    }
}

fn print_report(errors: &[String], warnings: &[String]) {
    if !errors.is_empty() {
        println!("❌ Validation errors found:");
        for error in errors {
            println!("  • {error}");
        }
    }
    if !warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in warnings {
            println!("  • {warning}");
        }
    }
    if errors.is_empty() && warnings.is_empty() {
        println!("✅ Hook configuration is valid");
    }
}

/// Inputs for one dispatch run.
pub struct DispatchArgs {
    pub file: PathBuf,
    pub event: String,
    pub tool: Option<String>,
    pub command_text: Option<String>,
    pub file_path: Option<PathBuf>,
    pub session_id: Option<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<String>,
    pub json: bool,
}

/// Run one dispatch and report the outcome. Exit 0 on proceed, 1 on block.
pub async fn dispatch(args: DispatchArgs) -> i32 {
    let Some(event) = EventKind::from_wire(&args.event) else {
        eprintln!(
            "❌ unknown event '{}' (valid: before, after, session_start, session_end, \
             agent_created, agent_destroyed, slash_command)",
            args.event
        );
        return exit_codes::ERROR;
    };

    let (definitions, warnings) = match load_hooks_file(&args.file) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("❌ {err}");
            return exit_codes::ERROR;
        }
    };
    for warning in &warnings {
        eprintln!("⚠️  {warning}");
    }

    let registry = match HookRegistry::load(definitions) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("❌ {err}");
            return exit_codes::ERROR;
        }
    };

    let cwd = match args.cwd.map(Ok).unwrap_or_else(std::env::current_dir) {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("❌ cannot determine working directory: {err}");
            return exit_codes::ERROR;
        }
    };
    let session_id = args
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut ctx = ExecutionContext::new(event, session_id, cwd);
    if let Some(tool) = args.tool {
        ctx = ctx.with_tool(tool);
    }
    if let Some(text) = args.command_text {
        ctx = ctx.with_command_text(text);
    }
    if let Some(path) = args.file_path {
        ctx = ctx.with_file_path(path);
    }
    for entry in &args.env {
        let Some((key, value)) = entry.split_once('=') else {
            eprintln!("❌ invalid --env entry '{entry}' (expected KEY=VALUE)");
            return exit_codes::ERROR;
        };
        ctx = ctx.with_env(key, value);
    }

    let dispatcher = Dispatcher::new(registry);
    let outcome = match dispatcher.dispatch(&ctx).await {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("❌ {err}");
            return exit_codes::ERROR;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("❌ cannot serialize outcome: {err}");
                return exit_codes::ERROR;
            }
        }
    } else {
        for result in &outcome.results {
            let exit = result
                .exit_code
                .map(|c| format!("exit {c}"))
                .unwrap_or_else(|| {
                    if result.timed_out {
                        "timed out".to_string()
                    } else {
                        "killed".to_string()
                    }
                });
            println!(
                "{}: {} ({}, {}ms)",
                result.hook_name, result.outcome, exit, result.duration_ms
            );
            if !result.stderr_tail.trim().is_empty() {
                for line in result.stderr_tail.trim_end().lines() {
                    println!("  | {line}");
                }
            }
        }
        match outcome.blocked_by() {
            Some(result) => println!("verdict: block ({})", result.hook_name),
            None => println!("verdict: {}", outcome.verdict),
        }
    }

    match outcome.verdict {
        Verdict::Proceed => exit_codes::SUCCESS,
        Verdict::Block => exit_codes::ERROR,
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

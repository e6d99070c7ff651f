// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default hooks file location.
pub const DEFAULT_HOOKS_FILE: &str = ".claude/hooks.json";

/// Hook validation and dispatch
#[derive(Parser, Debug)]
#[command(name = "hookrun", version, about = "Validate and dispatch lifecycle hooks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a hooks file
    Validate {
        /// Path to the hooks file
        #[arg(short = 'f', long, default_value = DEFAULT_HOOKS_FILE)]
        file: PathBuf,

        /// Check that this hook exists, in addition to full validation
        #[arg(short = 'n', long)]
        hook_name: Option<String>,
    },

    /// Dispatch one event against a hooks file
    Dispatch {
        /// Path to the hooks file
        #[arg(short = 'f', long, default_value = DEFAULT_HOOKS_FILE)]
        file: PathBuf,

        /// Event kind: before, after, session_start, session_end,
        /// agent_created, agent_destroyed, slash_command
        #[arg(long)]
        event: String,

        /// Tool name for tool-scoped events
        #[arg(long)]
        tool: Option<String>,

        /// Command the host is about to run (before/bash)
        #[arg(long)]
        command_text: Option<String>,

        /// File the host action operates on
        #[arg(long)]
        file_path: Option<PathBuf>,

        /// Session identifier (random UUID when omitted)
        #[arg(long)]
        session_id: Option<String>,

        /// Working directory for hook subprocesses (default: current)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Extra KEY=VALUE environment entries for hook subprocesses
        #[arg(long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,

        /// Emit the dispatch outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

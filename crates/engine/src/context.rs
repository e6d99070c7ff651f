// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-dispatch execution context.

use crate::definition::EventKind;
use std::collections::HashMap;
use std::path::PathBuf;

/// Ephemeral description of one dispatched event. Created by the host per
/// dispatch and discarded after the caller consumes the outcome.
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    /// Event kind being dispatched
    pub event: EventKind,

    /// Tool name for tool-scoped events
    pub tool_name: Option<String>,

    /// File the host action operates on, if any
    pub file_path: Option<PathBuf>,

    /// Command the host is about to run (ToolBefore on "bash")
    pub command_text: Option<String>,

    /// Session identifier
    pub session_id: String,

    /// Working directory hooks are spawned in
    pub working_dir: PathBuf,

    /// Extra environment entries exposed to each hook subprocess
    pub env_overrides: HashMap<String, String>,
}

impl ExecutionContext {
    /// Create a context for an event in a session and working directory.
    pub fn new(
        event: EventKind,
        session_id: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            event,
            tool_name: None,
            file_path: None,
            command_text: None,
            session_id: session_id.into(),
            working_dir: working_dir.into(),
            env_overrides: HashMap::new(),
        }
    }

    /// Set the tool name.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool_name = Some(tool.into());
        self
    }

    /// Set the file path the host action operates on.
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Set the command text the host is about to run.
    pub fn with_command_text(mut self, text: impl Into<String>) -> Self {
        self.command_text = Some(text.into());
        self
    }

    /// Add an environment override for hook subprocesses.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_overrides.insert(key.into(), value.into());
        self
    }

    /// Assemble the environment exposed to a hook subprocess.
    ///
    /// The contract: `TOOL_NAME`, `FILE_PATH`, `CLAUDE_SESSION_ID`,
    /// `HOOK_NAME` are always present (empty when not applicable), plus
    /// `BASH_COMMAND` when the context carries a command text. Host
    /// overrides are applied last and win over the contract variables.
    pub fn hook_env(&self, hook_name: &str) -> Vec<(String, String)> {
        let mut env = vec![
            (
                "TOOL_NAME".to_string(),
                self.tool_name.clone().unwrap_or_default(),
            ),
            (
                "FILE_PATH".to_string(),
                self.file_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            ("CLAUDE_SESSION_ID".to_string(), self.session_id.clone()),
            ("HOOK_NAME".to_string(), hook_name.to_string()),
        ];
        if let Some(ref command) = self.command_text {
            env.push(("BASH_COMMAND".to_string(), command.clone()));
        }
        for (key, value) in &self.env_overrides {
            env.push((key.clone(), value.clone()));
        }
        env
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

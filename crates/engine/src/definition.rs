// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook definition types.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default hook timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Hook event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Before tool execution (can veto)
    #[serde(rename = "before")]
    ToolBefore,
    /// After tool execution
    #[serde(rename = "after")]
    ToolAfter,
    /// Session start
    SessionStart,
    /// Session end
    SessionEnd,
    /// Subagent created
    AgentCreated,
    /// Subagent destroyed
    AgentDestroyed,
    /// Slash command submitted (can veto)
    SlashCommand,
}

impl EventKind {
    /// Get the wire-format event name used in hooks files.
    pub fn wire_name(&self) -> &'static str {
        match self {
            EventKind::ToolBefore => "before",
            EventKind::ToolAfter => "after",
            EventKind::SessionStart => "session_start",
            EventKind::SessionEnd => "session_end",
            EventKind::AgentCreated => "agent_created",
            EventKind::AgentDestroyed => "agent_destroyed",
            EventKind::SlashCommand => "slash_command",
        }
    }

    /// Parse a wire-format event name.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "before" => Some(EventKind::ToolBefore),
            "after" => Some(EventKind::ToolAfter),
            "session_start" => Some(EventKind::SessionStart),
            "session_end" => Some(EventKind::SessionEnd),
            "agent_created" => Some(EventKind::AgentCreated),
            "agent_destroyed" => Some(EventKind::AgentDestroyed),
            "slash_command" => Some(EventKind::SlashCommand),
            _ => None,
        }
    }

    /// Whether a failing hook of this kind vetoes the guarded host action.
    pub fn is_blocking(&self) -> bool {
        matches!(self, EventKind::ToolBefore | EventKind::SlashCommand)
    }

    /// Whether hooks of this kind are scoped to a tool.
    pub fn is_tool_scoped(&self) -> bool {
        matches!(self, EventKind::ToolBefore | EventKind::ToolAfter)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Comparison operator for file-size conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl SizeOp {
    /// Evaluate `actual <op> limit`.
    pub fn holds(&self, actual: u64, limit: u64) -> bool {
        match self {
            SizeOp::Lt => actual < limit,
            SizeOp::Le => actual <= limit,
            SizeOp::Gt => actual > limit,
            SizeOp::Ge => actual >= limit,
        }
    }
}

impl std::fmt::Display for SizeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SizeOp::Lt => "<",
            SizeOp::Le => "<=",
            SizeOp::Gt => ">",
            SizeOp::Ge => ">=",
        })
    }
}

/// A single applicability condition, evaluated against the execution context.
#[derive(Clone, Debug)]
pub enum Condition {
    /// File extension match, stored without the leading dot (case-sensitive).
    FileExtension(String),
    /// Normalized-path prefix test against the context's file path.
    PathPrefix(PathBuf),
    /// Size comparison against the file at the context's file path.
    FileSizeLimit { op: SizeOp, bytes: u64 },
}

/// A hook definition. Immutable once the registry has loaded it.
#[derive(Clone, Debug)]
pub struct HookDefinition {
    /// Unique hook name
    pub name: String,

    /// Event this hook is bound to
    pub event: EventKind,

    /// Tool names this hook applies to; empty matches any tool
    pub tools: Vec<String>,

    /// Opaque command line passed to the shell
    pub command: String,

    /// Disabled hooks never enter matching
    pub enabled: bool,

    /// Attach the child to the controlling terminal instead of capturing
    pub interactive: bool,

    /// Advisory blocking-kind hooks report failures without vetoing
    pub advisory: bool,

    /// Watchdog timeout; must be positive
    pub timeout: Duration,

    /// Conditions, all of which must hold (logical AND)
    pub conditions: Vec<Condition>,

    /// Name of a prerequisite hook in the same event scope
    pub depends_on: Option<String>,

    /// Literal substring tested against the triggering command text
    pub match_pattern: Option<String>,

    /// Regex tested against the triggering command text
    pub match_regex: Option<Regex>,
}

impl HookDefinition {
    /// Create a definition with defaults: enabled, non-interactive,
    /// non-advisory, 30 second timeout, no conditions.
    pub fn new(name: impl Into<String>, event: EventKind, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event,
            tools: Vec::new(),
            command: command.into(),
            enabled: true,
            interactive: false,
            advisory: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            conditions: Vec::new(),
            depends_on: None,
            match_pattern: None,
            match_regex: None,
        }
    }

    /// Restrict to a single tool.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tools.push(tool.into());
        self
    }

    /// Restrict to a set of tools.
    pub fn with_tools(mut self, tools: impl IntoIterator<Item = String>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Set enabled state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set interactive mode.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Mark the hook advisory (non-vetoing for blocking event kinds).
    pub fn with_advisory(mut self, advisory: bool) -> Self {
        self.advisory = advisory;
        self
    }

    /// Set the watchdog timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Name a prerequisite hook.
    pub fn with_depends_on(mut self, name: impl Into<String>) -> Self {
        self.depends_on = Some(name.into());
        self
    }

    /// Set a literal substring matcher on the command text.
    pub fn with_match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }

    /// Set a compiled regex matcher on the command text.
    pub fn with_match_regex(mut self, regex: Regex) -> Self {
        self.match_regex = Some(regex);
        self
    }

    /// Whether this hook applies to the given tool name.
    pub fn applies_to_tool(&self, tool: Option<&str>) -> bool {
        if self.tools.is_empty() {
            return true;
        }
        match tool {
            Some(tool) => self.tools.iter().any(|t| t == tool),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hooks-file loader: JSON/JSON5 documents into hook definitions.

use crate::definition::{Condition, EventKind, HookDefinition, SizeOp, DEFAULT_TIMEOUT_SECS};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tool names the host is known to raise events for. Unknown names load
/// fine (hosts add tools over time) but produce a warning.
pub const KNOWN_TOOLS: &[&str] = &[
    "bash",
    "write",
    "read",
    "edit",
    "glob",
    "grep",
    "webfetch",
    "task",
    "slashcommand",
    "killshell",
    "git",
    "mcp",
];

/// Timeouts above this many seconds are flagged as very long.
const LONG_TIMEOUT_SECS: u64 = 300;

/// Errors reading or interpreting a hooks file.
#[derive(Debug, Error)]
pub enum HooksFileError {
    #[error("cannot read hooks file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid hooks document: {0}")]
    Parse(String),

    #[error("hook {hook}: unknown event '{event}'")]
    UnknownEvent { hook: String, event: String },

    #[error("hook {hook}: invalid regex: {error}")]
    InvalidRegex { hook: String, error: regex::Error },

    #[error("hook {hook}: invalid fileSize '{value}' (use e.g. \"<100KB\", \">=1MB\")")]
    InvalidSize { hook: String, value: String },

    #[error("hook {hook}: timeout must be positive")]
    InvalidTimeout { hook: String },
}

/// Hooks document schema.
///
/// Permissive about unknown fields so documents written for newer engine
/// versions still load.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HooksFile {
    #[serde(default)]
    hooks: Vec<HookEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HookEntry {
    name: String,
    event: String,
    #[serde(default)]
    tools: Vec<String>,
    command: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    interactive: bool,
    #[serde(default)]
    advisory: bool,
    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    timeout: u64,
    #[serde(default)]
    depends_on: Option<String>,
    #[serde(default)]
    match_pattern: Option<String>,
    #[serde(default)]
    match_regex: Option<String>,
    #[serde(default)]
    conditions: Option<ConditionsEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConditionsEntry {
    file_extension: Option<String>,
    path_prefix: Option<PathBuf>,
    file_size: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Load a hooks file from disk.
///
/// Returns the definitions plus human-readable validation warnings
/// (long timeouts, unknown tool names, leading-dot extensions). The caller
/// feeds the definitions to [`crate::HookRegistry::load`] for the
/// structural checks.
pub fn load_hooks_file(path: &Path) -> Result<(Vec<HookDefinition>, Vec<String>), HooksFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_hooks(&content)
}

/// Parse a hooks document from a string. JSON5 first (comments, trailing
/// commas), strict JSON as fallback.
pub fn parse_hooks(content: &str) -> Result<(Vec<HookDefinition>, Vec<String>), HooksFileError> {
    let file: HooksFile = json5::from_str(content)
        .or_else(|_| serde_json::from_str(content).map_err(|e| HooksFileError::Parse(e.to_string())))?;

    let mut warnings = Vec::new();
    if file.hooks.is_empty() {
        warnings.push("no hooks defined".to_string());
    }

    let mut definitions = Vec::with_capacity(file.hooks.len());
    for entry in file.hooks {
        definitions.push(convert_entry(entry, &mut warnings)?);
    }
    Ok((definitions, warnings))
}

fn convert_entry(
    entry: HookEntry,
    warnings: &mut Vec<String>,
) -> Result<HookDefinition, HooksFileError> {
    let Some(event) = EventKind::from_wire(&entry.event) else {
        return Err(HooksFileError::UnknownEvent {
            hook: entry.name,
            event: entry.event,
        });
    };

    if entry.timeout == 0 {
        return Err(HooksFileError::InvalidTimeout { hook: entry.name });
    }
    if entry.timeout > LONG_TIMEOUT_SECS {
        warnings.push(format!(
            "hook {}: timeout ({}s) is very long",
            entry.name, entry.timeout
        ));
    }

    for tool in &entry.tools {
        if !KNOWN_TOOLS.contains(&tool.as_str()) {
            warnings.push(format!("hook {}: unknown tool '{}'", entry.name, tool));
        }
    }

    let mut hook = HookDefinition::new(entry.name.clone(), event, entry.command)
        .with_tools(entry.tools)
        .with_enabled(entry.enabled)
        .with_interactive(entry.interactive)
        .with_advisory(entry.advisory)
        .with_timeout_secs(entry.timeout);

    if let Some(dep) = entry.depends_on {
        hook = hook.with_depends_on(dep);
    }
    if let Some(pattern) = entry.match_pattern {
        hook = hook.with_match_pattern(pattern);
    }
    if let Some(source) = entry.match_regex {
        let regex = Regex::new(&source).map_err(|error| HooksFileError::InvalidRegex {
            hook: entry.name.clone(),
            error,
        })?;
        hook = hook.with_match_regex(regex);
    }

    if let Some(conditions) = entry.conditions {
        if let Some(ext) = conditions.file_extension {
            let trimmed = match ext.strip_prefix('.') {
                Some(rest) => {
                    warnings.push(format!(
                        "hook {}: fileExtension should not include the leading dot",
                        entry.name
                    ));
                    rest.to_string()
                }
                None => ext,
            };
            hook = hook.with_condition(Condition::FileExtension(trimmed));
        }
        if let Some(prefix) = conditions.path_prefix {
            hook = hook.with_condition(Condition::PathPrefix(prefix));
        }
        if let Some(size) = conditions.file_size {
            let Some((op, bytes)) = parse_size(&size) else {
                return Err(HooksFileError::InvalidSize {
                    hook: entry.name,
                    value: size,
                });
            };
            hook = hook.with_condition(Condition::FileSizeLimit { op, bytes });
        }
    }

    Ok(hook)
}

/// Parse a size literal: optional comparison operator, decimal magnitude,
/// `B`/`KB`/`MB`/`GB`/`TB` unit (case-insensitive, binary multiples).
/// A bare size like `"100KB"` reads as a maximum, i.e. `<`.
fn parse_size(value: &str) -> Option<(SizeOp, u64)> {
    let trimmed = value.trim();
    let (op, rest) = if let Some(rest) = trimmed.strip_prefix("<=") {
        (SizeOp::Le, rest)
    } else if let Some(rest) = trimmed.strip_prefix(">=") {
        (SizeOp::Ge, rest)
    } else if let Some(rest) = trimmed.strip_prefix('<') {
        (SizeOp::Lt, rest)
    } else if let Some(rest) = trimmed.strip_prefix('>') {
        (SizeOp::Gt, rest)
    } else {
        (SizeOp::Lt, trimmed)
    };

    let rest = rest.trim();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (magnitude, unit) = rest.split_at(digits_end);
    let magnitude: u64 = magnitude.parse().ok()?;

    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "B" => 1,
        "KB" => 1 << 10,
        "MB" => 1 << 20,
        "GB" => 1 << 30,
        "TB" => 1 << 40,
        _ => return None,
    };

    magnitude.checked_mul(multiplier).map(|bytes| (op, bytes))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

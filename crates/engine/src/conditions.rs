// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Condition evaluation: does a hook apply to a concrete event context?

use crate::context::ExecutionContext;
use crate::definition::{Condition, HookDefinition};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Whether a hook applies to the context. All of the hook's conditions must
/// hold, along with its command-text matchers; a hook with no conditions and
/// no matchers matches unconditionally within its event/tool scope.
///
/// Pure apart from a filesystem stat for size checks; evaluation failures
/// (unreadable file) are non-matches, never errors.
pub fn matches(hook: &HookDefinition, ctx: &ExecutionContext) -> bool {
    if let Some(ref pattern) = hook.match_pattern {
        match ctx.command_text {
            Some(ref text) if text.contains(pattern.as_str()) => {}
            _ => return false,
        }
    }

    if let Some(ref regex) = hook.match_regex {
        match ctx.command_text {
            Some(ref text) if regex.is_match(text) => {}
            _ => return false,
        }
    }

    hook.conditions.iter().all(|c| condition_holds(c, ctx))
}

fn condition_holds(condition: &Condition, ctx: &ExecutionContext) -> bool {
    match condition {
        Condition::FileExtension(ext) => ctx
            .file_path
            .as_deref()
            .and_then(Path::extension)
            .is_some_and(|actual| actual.to_str() == Some(ext.as_str())),

        Condition::PathPrefix(prefix) => ctx
            .file_path
            .as_deref()
            .is_some_and(|path| normalize(path).starts_with(normalize(prefix))),

        Condition::FileSizeLimit { op, bytes } => {
            let Some(path) = ctx.file_path.as_deref() else {
                return false;
            };
            match std::fs::metadata(path) {
                Ok(meta) => op.holds(meta.len(), *bytes),
                Err(err) => {
                    debug!(path = %path.display(), %err, "size check failed, treating as non-match");
                    false
                }
            }
        }
    }
}

/// Lexically normalize a path: resolve `.` and `..` components without
/// touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "conditions_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook registry: load-time validation and event lookup.

use crate::definition::{EventKind, HookDefinition};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that reject a registry at load time. No registry is constructed
/// when any definition fails validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("duplicate hook name: {name}")]
    DuplicateName { name: String },

    #[error("hook {hook} depends on unknown hook {depends_on}")]
    UnknownDependency { hook: String, depends_on: String },

    #[error("hook {hook} depends on {depends_on}, which is bound to a different scope")]
    ScopeMismatch { hook: String, depends_on: String },

    #[error("cyclic hook dependency: {cycle}")]
    CyclicDependency { cycle: String },

    #[error("hook {name} has a non-positive timeout")]
    InvalidTimeout { name: String },
}

/// Validated, immutable hook registry. Read-only after [`HookRegistry::load`]
/// and safe to share across concurrent dispatches.
#[derive(Clone, Debug)]
pub struct HookRegistry {
    hooks: Vec<HookDefinition>,
    by_name: HashMap<String, usize>,
}

impl HookRegistry {
    /// Validate an ordered sequence of definitions and build the registry.
    ///
    /// Checks, in order: positive timeouts, name uniqueness, `dependsOn`
    /// resolution and scope compatibility, and acyclicity of the dependency
    /// relation.
    pub fn load(definitions: Vec<HookDefinition>) -> Result<Self, ValidationError> {
        let mut by_name = HashMap::with_capacity(definitions.len());

        for (index, hook) in definitions.iter().enumerate() {
            if hook.timeout.is_zero() {
                return Err(ValidationError::InvalidTimeout {
                    name: hook.name.clone(),
                });
            }
            if by_name.insert(hook.name.clone(), index).is_some() {
                return Err(ValidationError::DuplicateName {
                    name: hook.name.clone(),
                });
            }
        }

        for hook in &definitions {
            let Some(ref dep_name) = hook.depends_on else {
                continue;
            };
            let Some(&dep_index) = by_name.get(dep_name) else {
                return Err(ValidationError::UnknownDependency {
                    hook: hook.name.clone(),
                    depends_on: dep_name.clone(),
                });
            };
            if !scopes_overlap(hook, &definitions[dep_index]) {
                return Err(ValidationError::ScopeMismatch {
                    hook: hook.name.clone(),
                    depends_on: dep_name.clone(),
                });
            }
        }

        detect_cycles(&definitions, &by_name)?;

        Ok(Self {
            hooks: definitions,
            by_name,
        })
    }

    /// Enabled hooks bound to the event whose tool filter is empty or
    /// contains `tool`, in insertion order.
    pub fn lookup(&self, event: EventKind, tool: Option<&str>) -> Vec<&HookDefinition> {
        self.hooks
            .iter()
            .filter(|h| h.enabled && h.event == event && h.applies_to_tool(tool))
            .collect()
    }

    /// Look up a hook by name.
    pub fn get(&self, name: &str) -> Option<&HookDefinition> {
        self.by_name.get(name).map(|&i| &self.hooks[i])
    }

    /// Insertion position of a hook, used as the resolver's stable tie-break.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// All definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HookDefinition> {
        self.hooks.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// A dependency must live in the same event scope as its dependent: the
/// same event kind, and for tool-scoped hooks an overlapping tool filter
/// (an empty filter overlaps everything).
fn scopes_overlap(hook: &HookDefinition, dep: &HookDefinition) -> bool {
    if hook.event != dep.event {
        return false;
    }
    if hook.tools.is_empty() || dep.tools.is_empty() {
        return true;
    }
    hook.tools.iter().any(|t| dep.tools.contains(t))
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    InStack,
    Done,
}

/// Depth-first traversal with a recursion stack; a back-edge is a cycle.
fn detect_cycles(
    hooks: &[HookDefinition],
    by_name: &HashMap<String, usize>,
) -> Result<(), ValidationError> {
    let mut state = vec![VisitState::Unvisited; hooks.len()];

    for start in 0..hooks.len() {
        if state[start] != VisitState::Unvisited {
            continue;
        }
        // Each node has at most one outgoing edge, so the "stack" is a path.
        let mut path = Vec::new();
        let mut current = start;
        loop {
            state[current] = VisitState::InStack;
            path.push(current);

            let Some(next) = hooks[current]
                .depends_on
                .as_deref()
                .and_then(|d| by_name.get(d).copied())
            else {
                break;
            };
            match state[next] {
                VisitState::Done => break,
                VisitState::InStack => {
                    let names: Vec<&str> = path
                        .iter()
                        .skip_while(|&&i| i != next)
                        .map(|&i| hooks[i].name.as_str())
                        .chain(std::iter::once(hooks[next].name.as_str()))
                        .collect();
                    return Err(ValidationError::CyclicDependency {
                        cycle: names.join(" -> "),
                    });
                }
                VisitState::Unvisited => current = next,
            }
        }
        for index in path {
            state[index] = VisitState::Done;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

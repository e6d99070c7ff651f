// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency ordering for the hooks matched by one dispatch.

use crate::definition::HookDefinition;
use crate::registry::ValidationError;
use std::collections::HashMap;

/// Produce a total order over the matched hooks consistent with every
/// `dependsOn` edge present among them (Kahn's algorithm). Hooks with no
/// edges between them keep their relative input order, which is registry
/// insertion order, so runs are deterministic. An edge to a hook that did
/// not match is treated as already satisfied.
///
/// The registry rejected cycles at load time, so a cycle here is a
/// defensive failure: the dispatch aborts with no hooks executed.
pub fn order<'a>(
    matched: Vec<&'a HookDefinition>,
) -> Result<Vec<&'a HookDefinition>, ValidationError> {
    if matched.len() <= 1 {
        return Ok(matched);
    }

    let index_of: HashMap<&str, usize> = matched
        .iter()
        .enumerate()
        .map(|(i, h)| (h.name.as_str(), i))
        .collect();

    // dependents[i] lists hooks waiting on i; indegree counts in-subset edges.
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); matched.len()];
    let mut indegree = vec![0usize; matched.len()];
    for (i, hook) in matched.iter().enumerate() {
        if let Some(&dep) = hook.depends_on.as_deref().and_then(|d| index_of.get(d)) {
            dependents[dep].push(i);
            indegree[i] += 1;
        }
    }

    let mut ready: Vec<usize> = (0..matched.len()).filter(|&i| indegree[i] == 0).collect();
    let mut ordered = Vec::with_capacity(matched.len());

    while !ready.is_empty() {
        // Smallest input index first keeps the tie-break stable.
        let pos = ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| i)
            .map(|(pos, _)| pos)
            .unwrap_or(0);
        let next = ready.swap_remove(pos);
        ordered.push(matched[next]);

        for &dependent in &dependents[next] {
            indegree[dependent] -= 1;
            if indegree[dependent] == 0 {
                ready.push(dependent);
            }
        }
    }

    if ordered.len() < matched.len() {
        let leftover: Vec<&str> = matched
            .iter()
            .enumerate()
            .filter(|&(i, _)| indegree[i] > 0)
            .map(|(_, h)| h.name.as_str())
            .collect();
        return Err(ValidationError::CyclicDependency {
            cycle: leftover.join(" -> "),
        });
    }

    Ok(ordered)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

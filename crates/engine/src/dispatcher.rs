// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event dispatcher: the façade tying registry, conditions, resolver, and
//! executor together.

use crate::conditions;
use crate::context::ExecutionContext;
use crate::executor::{HookError, HookExecutor};
use crate::registry::{HookRegistry, ValidationError};
use crate::resolver;
use crate::result::{DispatchOutcome, HookOutcome, Verdict};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Hard failures a dispatch can propagate: a defensive cycle report from the
/// resolver, or spawn-level resource exhaustion. Misbehaving hooks never
/// raise; they surface in the outcome's results.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Resolve(#[from] ValidationError),

    #[error(transparent)]
    Exec(#[from] HookError),
}

/// Dispatches events against a loaded registry.
///
/// The registry is shared read-only, so a dispatcher is cheap to clone and
/// concurrent dispatches are independent. Hooks within one dispatch run
/// strictly sequentially: dependency edges commonly encode required
/// precedence, and interleaved child output on a shared terminal would be
/// ambiguous. Children are spawned kill-on-drop, so cancelling a dispatch
/// (dropping its future) tears down the in-flight process.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    registry: Arc<HookRegistry>,
    executor: HookExecutor,
}

impl Dispatcher {
    /// Create a dispatcher over a loaded registry.
    pub fn new(registry: HookRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            executor: HookExecutor::new(),
        }
    }

    /// Replace the default executor (e.g. to bound tails differently).
    pub fn with_executor(mut self, executor: HookExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// The registry this dispatcher serves.
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Evaluate all hooks against one event occurrence.
    ///
    /// Lookup → condition filter → dependency ordering → sequential
    /// execution. A blocking-kind hook that aborts (or times out, unless
    /// advisory) stops the run and yields [`Verdict::Block`]; non-blocking
    /// kinds never block the host action. A hook whose prerequisite ran and
    /// failed is pruned: not executed and absent from the results. A
    /// prerequisite that never matched this event is satisfied by absence.
    pub async fn dispatch(&self, ctx: &ExecutionContext) -> Result<DispatchOutcome, DispatchError> {
        let candidates = self.registry.lookup(ctx.event, ctx.tool_name.as_deref());
        let matched: Vec<_> = candidates
            .into_iter()
            .filter(|hook| conditions::matches(hook, ctx))
            .collect();
        debug!(event = %ctx.event, matched = matched.len(), "hooks matched");

        let ordered = resolver::order(matched)?;

        let mut results = Vec::with_capacity(ordered.len());
        let mut verdict = Verdict::Proceed;
        let mut unsatisfied: HashSet<&str> = HashSet::new();

        for hook in ordered {
            if let Some(dep) = hook.depends_on.as_deref() {
                if unsatisfied.contains(dep) {
                    debug!(hook = %hook.name, prerequisite = dep, "pruned: prerequisite failed");
                    unsatisfied.insert(hook.name.as_str());
                    continue;
                }
            }

            let result = self.executor.run(hook, ctx).await?;
            let outcome = result.outcome;
            let timed_out = result.timed_out;
            results.push(result);

            if !outcome.satisfies_dependents() {
                unsatisfied.insert(hook.name.as_str());
            }

            let vetoes = outcome == HookOutcome::Aborted
                || (timed_out && hook.event.is_blocking() && !hook.advisory);
            if vetoes {
                info!(hook = %hook.name, "hook vetoed the guarded action");
                verdict = Verdict::Block;
                break;
            }
        }

        Ok(DispatchOutcome { results, verdict })
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

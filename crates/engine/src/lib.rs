// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook execution engine.
//!
//! Registers automation rules ("hooks") keyed to lifecycle and tool events,
//! matches incoming events against them, orders the survivors under
//! `dependsOn` constraints, and runs each one as a supervised, time-bounded
//! subprocess. The host raises an event through [`Dispatcher::dispatch`] and
//! receives per-hook results plus a proceed/block verdict; what a hook's
//! command body does is the hook author's concern.

pub mod conditions;
pub mod context;
pub mod definition;
pub mod dispatcher;
pub mod executor;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod result;

pub use context::ExecutionContext;
pub use definition::{Condition, EventKind, HookDefinition, SizeOp};
pub use dispatcher::{DispatchError, Dispatcher};
pub use executor::{HookError, HookExecutor};
pub use loader::{load_hooks_file, parse_hooks, HooksFileError};
pub use registry::{HookRegistry, ValidationError};
pub use result::{DispatchOutcome, ExecutionResult, HookOutcome, Verdict};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front-end for the hook execution engine.
//!
//! `hookrun validate` checks a hooks file the way the engine will read it;
//! `hookrun dispatch` runs one event against it and reports the verdict.

pub mod cli;
pub mod commands;

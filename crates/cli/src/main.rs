// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hookrun binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hookrun::cli::{Cli, Command};
use hookrun::commands::{self, DispatchArgs};

#[tokio::main]
async fn main() {
    // Quiet by default; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Command::Validate { file, hook_name } => {
            commands::validate(&file, hook_name.as_deref())
        }
        Command::Dispatch {
            file,
            event,
            tool,
            command_text,
            file_path,
            session_id,
            cwd,
            env,
            json,
        } => {
            commands::dispatch(DispatchArgs {
                file,
                event,
                tool,
                command_text,
                file_path,
                session_id,
                cwd,
                env,
                json,
            })
            .await
        }
    };
    std::process::exit(code);
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Fidelity - device performance tier detection for adaptive visual effects
//!
//! Entry point for the fidelity CLI application.

use clap::Parser;

use fidelity::cli::{Cli, Commands};
use fidelity::commands;
use fidelity::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` surfaces probe and selection diagnostics
    // without requiring users to know target names. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "fidelity=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Dispatch to appropriate command
    match cli.command {
        None | Some(Commands::Status) => {
            commands::status::execute(cli.prefs, &cli.format)?;
        }
        Some(Commands::Probe(args)) => {
            commands::probe::execute(&args, &cli.format)?;
        }
        Some(Commands::Recommend) => {
            commands::probe::recommend(&cli.format)?;
        }
        Some(Commands::Set(args)) => {
            commands::tier::set(&args, cli.prefs).await?;
        }
        Some(Commands::Accept) => {
            commands::tier::accept(cli.prefs).await?;
        }
        Some(Commands::Reset) => {
            commands::tier::reset(cli.prefs)?;
        }
        Some(Commands::Cursor(args)) => {
            commands::cursor::execute(&args, cli.prefs)?;
        }
    }

    Ok(())
}

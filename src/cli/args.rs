// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for fidelity.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fidelity - device performance tier detection and adaptive effect budgets
#[derive(Parser, Debug)]
#[command(name = "fidelity")]
#[command(version, about = "Device performance tier detection and adaptive effect budgets")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Preference file path (defaults to ~/.fidelity/preferences.json)
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe device capabilities and show the raw profile
    Probe(ProbeArgs),

    /// Show the recommended tier and its fidelity budget
    Recommend,

    /// Show selection status (default when no command given)
    Status,

    /// Select a tier and persist it
    Set(SetArgs),

    /// Accept the probed recommendation
    Accept,

    /// Clear the persisted tier so the next run re-prompts
    Reset,

    /// Show or change the cursor-effect preference
    Cursor(CursorArgs),
}

/// Output format options
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the probe subcommand
#[derive(clap::Args, Debug)]
pub struct ProbeArgs {
    /// Show detailed probe signals
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the set subcommand
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Tier to select (low, medium, high, ultra)
    pub tier: String,
}

/// Arguments for the cursor subcommand
#[derive(clap::Args, Debug)]
pub struct CursorArgs {
    /// New state (on, off, toggle); omit to show the current state
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_set_with_tier() {
        let cli = Cli::try_parse_from(["fidelity", "set", "high"]).unwrap();
        match cli.command {
            Some(Commands::Set(args)) => assert_eq!(args.tier, "high"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["fidelity"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fidelity", "probe", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cursor_state_optional() {
        let cli = Cli::try_parse_from(["fidelity", "cursor"]).unwrap();
        match cli.command {
            Some(Commands::Cursor(args)) => assert!(args.state.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

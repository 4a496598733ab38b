// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tier selection commands: set, accept, reset

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::args::SetArgs;
use crate::commands::build_controller;
use crate::controller::ApplyOutcome;
use crate::error::Result;
use crate::tier::PerformanceTier;

/// Execute the set command
pub async fn set(args: &SetArgs, prefs: Option<PathBuf>) -> Result<()> {
    let tier = PerformanceTier::from_str(&args.tier)?;
    let controller = build_controller(prefs);
    controller.initialize();

    match controller.select_tier(tier).await? {
        ApplyOutcome::Applied(tier) => {
            println!("Applied tier: {} ({})", tier, tier.description());
        }
        ApplyOutcome::Ignored => {
            println!("Another tier change is in flight; request ignored.");
        }
    }
    Ok(())
}

/// Execute the accept command
pub async fn accept(prefs: Option<PathBuf>) -> Result<()> {
    let controller = build_controller(prefs);
    controller.initialize();
    let recommended = controller.recommended_tier();

    match controller.accept_recommended().await? {
        ApplyOutcome::Applied(tier) => {
            println!("Accepted recommendation: {} ({})", tier, tier.description());
        }
        ApplyOutcome::Ignored => {
            println!(
                "Another tier change is in flight; recommendation {} not applied.",
                recommended
            );
        }
    }
    Ok(())
}

/// Execute the reset command
pub fn reset(prefs: Option<PathBuf>) -> Result<()> {
    let controller = build_controller(prefs);
    controller.clear_preference()?;
    println!("Cleared tier preference; the next run will prompt again.");
    Ok(())
}

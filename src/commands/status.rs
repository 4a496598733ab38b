// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Selection status command

use std::path::PathBuf;

use crate::cli::args::OutputFormat;
use crate::commands::{build_controller, probe::print_budget};
use crate::error::Result;

/// Execute the status command
pub fn execute(prefs: Option<PathBuf>, format: &OutputFormat) -> Result<()> {
    let controller = build_controller(prefs);
    controller.initialize();
    let status = controller.status();

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("\n=== Performance Selection Status ===\n");
    println!(
        "Current Tier: {} ({})",
        status.current_tier,
        status.current_tier.description()
    );
    println!("Recommended Tier: {}", status.recommended_tier);
    if status.needs_selection {
        println!("\nNo tier selected yet. Run `fidelity accept` to take the");
        println!("recommendation, or `fidelity set <tier>` to pick one.");
    }
    println!(
        "Cursor Effect: {}",
        if controller.cursor_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );

    if let Some(record) = &status.capabilities {
        println!("Capability Score: {}/12", record.performance_score);
    }

    print_budget(controller.current_config());
    Ok(())
}

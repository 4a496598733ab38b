// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cursor-effect preference command

use std::path::PathBuf;

use crate::cli::args::CursorArgs;
use crate::commands::build_controller;
use crate::error::{FidelityError, Result};

/// Execute the cursor command
pub fn execute(args: &CursorArgs, prefs: Option<PathBuf>) -> Result<()> {
    let controller = build_controller(prefs);

    let enabled = match args.state.as_deref() {
        None => controller.cursor_enabled(),
        Some("on") => {
            controller.set_cursor_enabled(true)?;
            true
        }
        Some("off") => {
            controller.set_cursor_enabled(false)?;
            false
        }
        Some("toggle") => controller.toggle_cursor()?,
        Some(other) => {
            return Err(FidelityError::InvalidInput(format!(
                "unknown cursor state '{}' (expected on, off, or toggle)",
                other
            )))
        }
    };

    println!(
        "Cursor effect: {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command implementations for the fidelity CLI

pub mod cursor;
pub mod probe;
pub mod status;
pub mod tier;

use std::path::PathBuf;

use crate::capability::{HostSignals, Prober};
use crate::controller::{NullEffectHost, PerformanceController};
use crate::store::FilePreferences;

/// Build a controller wired to the host signal source and the preference
/// file, with no effect attached.
pub fn build_controller(prefs: Option<PathBuf>) -> PerformanceController {
    let store = match prefs {
        Some(path) => FilePreferences::at(path),
        None => FilePreferences::new(),
    };
    PerformanceController::new(
        Prober::new(Box::new(HostSignals::new())),
        Box::new(store),
        Box::new(NullEffectHost),
    )
}

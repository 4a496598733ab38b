// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability scoring
//!
//! Reduces a [`CapabilityRecord`] to a bounded additive score. Pure and
//! total: defined for every valid record, deterministic, clamped to
//! `[0, MAX_SCORE]`.

use crate::capability::{CapabilityRecord, DeviceClass};

/// Upper bound of the capability score
pub const MAX_SCORE: u8 = 12;

/// Screen area above which a device earns a bonus point
const LARGE_SCREEN_AREA: u64 = 2_000_000;
/// Screen area below which a device loses a point
const SMALL_SCREEN_AREA: u64 = 1_000_000;

/// Compute the capability score for a record.
///
/// The record's own `performance_score` field is ignored; this is the
/// function that produces it.
pub fn compute(record: &CapabilityRecord) -> u8 {
    let mut score: i32 = 0;

    // CPU cores (0-3 points)
    if record.cpu_cores >= 8 {
        score += 3;
    } else if record.cpu_cores >= 4 {
        score += 2;
    } else if record.cpu_cores >= 2 {
        score += 1;
    }

    // Memory (0-3 points)
    if record.memory_gb >= 8 {
        score += 3;
    } else if record.memory_gb >= 4 {
        score += 2;
    } else if record.memory_gb >= 2 {
        score += 1;
    }

    // Graphics capability (0-2 points)
    if record.supports_advanced_graphics {
        score += 2;
    } else if record.supports_basic_graphics {
        score += 1;
    }

    // Connection speed (0-2 points); no introspection assumes a good link
    match &record.network {
        Some(network) => {
            if network.effective_type == "4g" || network.downlink_mbps > 2.0 {
                score += 2;
            } else if network.effective_type == "3g" || network.downlink_mbps > 1.0 {
                score += 1;
            }
        }
        None => score += 1,
    }

    // Device class penalty
    if record.device_class == DeviceClass::Mobile {
        score -= 1;
    }

    // Screen size consideration
    let area = record.screen.area();
    if area > LARGE_SCREEN_AREA {
        score += 1;
    } else if area < SMALL_SCREEN_AREA {
        score -= 1;
    }

    score.clamp(0, i32::from(MAX_SCORE)) as u8
}

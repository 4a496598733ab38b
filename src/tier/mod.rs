// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Performance tier classification and the static fidelity configuration table

pub mod config;

pub use config::{AnimationConfig, FluidConfig, TierConfig};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FidelityError;

/// Visual-fidelity tier, ordered from lowest to highest fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    /// Older devices and slow connections
    Low,
    /// Balanced default for most devices
    Medium,
    /// Powerful devices
    High,
    /// High-end devices with headroom for advanced effects
    Ultra,
}

impl PerformanceTier {
    /// All tiers in ascending fidelity order
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Low,
        PerformanceTier::Medium,
        PerformanceTier::High,
        PerformanceTier::Ultra,
    ];

    /// Map a capability score in `[0, 12]` to a recommended tier.
    ///
    /// Inclusive lower bounds: 10 for Ultra, 8 for High, 5 for Medium.
    pub fn recommend(score: u8) -> Self {
        if score >= 10 {
            PerformanceTier::Ultra
        } else if score >= 8 {
            PerformanceTier::High
        } else if score >= 5 {
            PerformanceTier::Medium
        } else {
            PerformanceTier::Low
        }
    }

    /// The persisted symbol for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Low => "low",
            PerformanceTier::Medium => "medium",
            PerformanceTier::High => "high",
            PerformanceTier::Ultra => "ultra",
        }
    }

    /// Human-readable tier name
    pub fn name(&self) -> &'static str {
        match self {
            PerformanceTier::Low => "Low Performance",
            PerformanceTier::Medium => "Medium Performance",
            PerformanceTier::High => "High Performance",
            PerformanceTier::Ultra => "Ultra Performance",
        }
    }

    /// One-line description shown in the selection surface
    pub fn description(&self) -> &'static str {
        match self {
            PerformanceTier::Low => "Optimized for older devices and slower connections",
            PerformanceTier::Medium => "Balanced performance for most devices",
            PerformanceTier::High => "Enhanced experience for powerful devices",
            PerformanceTier::Ultra => "Ultimate experience for high-end devices",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceTier {
    type Err = FidelityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(PerformanceTier::Low),
            "medium" => Ok(PerformanceTier::Medium),
            "high" => Ok(PerformanceTier::High),
            "ultra" => Ok(PerformanceTier::Ultra),
            other => Err(FidelityError::UnknownTier(other.to_string())),
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Probed device capability snapshot

use serde::{Deserialize, Serialize};

/// Coarse device classification from descriptor-string matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// Best-effort GPU identification. All fields fall back to `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuDescriptor {
    pub vendor: String,
    pub renderer: String,
    pub api_version: String,
    pub shading_language_version: String,
}

impl Default for GpuDescriptor {
    fn default() -> Self {
        GpuDescriptor {
            vendor: "Unknown".to_string(),
            renderer: "Unknown".to_string(),
            api_version: "Unknown".to_string(),
            shading_language_version: "Unknown".to_string(),
        }
    }
}

/// Connection introspection, present only when the platform exposes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Connection class symbol, e.g. "4g" or "3g"
    pub effective_type: String,
    pub downlink_mbps: f64,
    pub round_trip_ms: u32,
}

/// Physical and available screen dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
    pub avail_width: u32,
    pub avail_height: u32,
}

impl ScreenGeometry {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Immutable snapshot of probed and estimated device characteristics.
///
/// Created once per probe; `performance_score` is a pure function of the
/// other fields, computed at construction and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    /// CPU core count, reported or estimated, always at least 1
    pub cpu_cores: usize,
    /// Memory estimate in GB, reported (with corrective override) or estimated
    pub memory_gb: u64,
    /// Basic graphics-API level available (any usable adapter)
    pub supports_basic_graphics: bool,
    /// Advanced graphics-API level available (fully compliant adapter)
    pub supports_advanced_graphics: bool,
    pub gpu: GpuDescriptor,
    pub network: Option<NetworkInfo>,
    pub device_class: DeviceClass,
    pub screen: ScreenGeometry,
    pub pixel_ratio: f64,
    pub color_depth: u32,
    /// Raw environment descriptor the heuristics matched against
    pub descriptor: String,
    /// Capability score in `[0, 12]`
    pub performance_score: u8,
}

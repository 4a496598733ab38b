// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static per-tier fidelity budgets consumed by the rendering side
//!
//! The table is pure data: four fixed bundles of numeric knobs for the fluid
//! cursor simulation plus animation-behavior flags. Lookup is total; an
//! unrecognized tier symbol resolves to the Medium bundle so downstream
//! consumers can always render.

use serde::Serialize;
use std::str::FromStr;

use super::PerformanceTier;

/// Fluid-simulation parameters for the splash-cursor effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidConfig {
    pub sim_resolution: u32,
    pub dye_resolution: u32,
    pub capture_resolution: u32,
    pub density_dissipation: f32,
    pub velocity_dissipation: f32,
    pub pressure: f32,
    pub pressure_iterations: u32,
    pub curl: f32,
    pub splat_radius: f32,
    pub splat_force: f32,
    pub shading: bool,
    pub color_update_speed: u32,
    pub target_fps: u32,
}

/// Animation-behavior flags for the rest of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationConfig {
    pub reduced_motion: bool,
    pub disable_complex_animations: bool,
    pub reduce_particle_count: bool,
    pub lower_quality_textures: bool,
    pub enable_advanced_effects: bool,
    pub enable_particle_systems: bool,
    pub enable_shaders: bool,
}

/// Complete fidelity budget for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierConfig {
    pub tier: PerformanceTier,
    pub name: &'static str,
    pub description: &'static str,
    pub fluid: FluidConfig,
    pub animations: AnimationConfig,
}

const LOW: TierConfig = TierConfig {
    tier: PerformanceTier::Low,
    name: "Low Performance",
    description: "Optimized for older devices and slower connections",
    fluid: FluidConfig {
        sim_resolution: 32,
        dye_resolution: 256,
        capture_resolution: 128,
        density_dissipation: 3.0,
        velocity_dissipation: 2.0,
        pressure: 0.1,
        pressure_iterations: 5,
        curl: 1.0,
        splat_radius: 0.1,
        splat_force: 2000.0,
        shading: false,
        color_update_speed: 3,
        target_fps: 20,
    },
    animations: AnimationConfig {
        reduced_motion: true,
        disable_complex_animations: true,
        reduce_particle_count: true,
        lower_quality_textures: true,
        enable_advanced_effects: false,
        enable_particle_systems: false,
        enable_shaders: false,
    },
};

const MEDIUM: TierConfig = TierConfig {
    tier: PerformanceTier::Medium,
    name: "Medium Performance",
    description: "Balanced performance for most devices",
    fluid: FluidConfig {
        sim_resolution: 48,
        dye_resolution: 384,
        capture_resolution: 192,
        density_dissipation: 2.5,
        velocity_dissipation: 1.8,
        pressure: 0.1,
        pressure_iterations: 8,
        curl: 1.5,
        splat_radius: 0.12,
        splat_force: 2500.0,
        shading: false,
        color_update_speed: 4,
        target_fps: 30,
    },
    animations: AnimationConfig {
        reduced_motion: false,
        disable_complex_animations: false,
        reduce_particle_count: false,
        lower_quality_textures: false,
        enable_advanced_effects: false,
        enable_particle_systems: false,
        enable_shaders: false,
    },
};

const HIGH: TierConfig = TierConfig {
    tier: PerformanceTier::High,
    name: "High Performance",
    description: "Enhanced experience for powerful devices",
    fluid: FluidConfig {
        sim_resolution: 80,
        dye_resolution: 640,
        capture_resolution: 320,
        density_dissipation: 1.8,
        velocity_dissipation: 1.3,
        pressure: 0.1,
        pressure_iterations: 12,
        curl: 2.5,
        splat_radius: 0.18,
        splat_force: 3500.0,
        shading: false,
        color_update_speed: 6,
        target_fps: 60,
    },
    animations: AnimationConfig {
        reduced_motion: false,
        disable_complex_animations: false,
        reduce_particle_count: false,
        lower_quality_textures: false,
        enable_advanced_effects: false,
        enable_particle_systems: false,
        enable_shaders: false,
    },
};

const ULTRA: TierConfig = TierConfig {
    tier: PerformanceTier::Ultra,
    name: "Ultra Performance",
    description: "Ultimate experience for high-end devices",
    fluid: FluidConfig {
        sim_resolution: 96,
        dye_resolution: 768,
        capture_resolution: 384,
        density_dissipation: 1.5,
        velocity_dissipation: 1.0,
        pressure: 0.1,
        pressure_iterations: 15,
        curl: 3.0,
        splat_radius: 0.2,
        splat_force: 4000.0,
        shading: true,
        color_update_speed: 8,
        target_fps: 120,
    },
    animations: AnimationConfig {
        reduced_motion: false,
        disable_complex_animations: false,
        reduce_particle_count: false,
        lower_quality_textures: false,
        enable_advanced_effects: true,
        enable_particle_systems: true,
        enable_shaders: true,
    },
};

impl TierConfig {
    /// Look up the fidelity budget for a tier. Total over the enum.
    pub fn for_tier(tier: PerformanceTier) -> &'static TierConfig {
        match tier {
            PerformanceTier::Low => &LOW,
            PerformanceTier::Medium => &MEDIUM,
            PerformanceTier::High => &HIGH,
            PerformanceTier::Ultra => &ULTRA,
        }
    }

    /// Look up by persisted symbol; unrecognized symbols resolve to Medium.
    pub fn for_name(name: &str) -> &'static TierConfig {
        match PerformanceTier::from_str(name) {
            Ok(tier) => Self::for_tier(tier),
            Err(_) => &MEDIUM,
        }
    }

    /// Scale a base animation duration to this tier.
    ///
    /// Lower tiers shorten animations for responsiveness; Ultra stretches
    /// them slightly for smoothness.
    pub fn animation_duration(&self, base_seconds: f32) -> f32 {
        let scale = match self.tier {
            PerformanceTier::Low => 0.5,
            PerformanceTier::Medium => 0.8,
            PerformanceTier::High => 1.0,
            PerformanceTier::Ultra => 1.2,
        };
        base_seconds * scale
    }

    /// Scale a base particle count to this tier.
    pub fn particle_count(&self, base_count: u32) -> u32 {
        let scale = match self.tier {
            PerformanceTier::Low => 0.3,
            PerformanceTier::Medium => 0.6,
            PerformanceTier::High => 1.0,
            PerformanceTier::Ultra => 1.5,
        };
        (base_count as f32 * scale).floor() as u32
    }

    /// Texture/image quality symbol for this tier
    pub fn quality_level(&self) -> &'static str {
        self.tier.as_str()
    }

    /// Whether motion should be minimized
    pub fn should_reduce_motion(&self) -> bool {
        self.animations.reduced_motion
    }

    /// Whether complex animations are disabled
    pub fn complex_animations_disabled(&self) -> bool {
        self.animations.disable_complex_animations
    }

    /// Frame-rate target for the effect loop
    pub fn target_fps(&self) -> u32 {
        self.fluid.target_fps
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability probe and recommendation commands

use crate::capability::{CapabilityRecord, HostSignals, Prober};
use crate::cli::args::{OutputFormat, ProbeArgs};
use crate::error::Result;
use crate::tier::{PerformanceTier, TierConfig};

fn probe_host() -> CapabilityRecord {
    Prober::new(Box::new(HostSignals::new())).probe()
}

/// Execute the probe command
pub fn execute(args: &ProbeArgs, format: &OutputFormat) -> Result<()> {
    let record = probe_host();

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let recommended = PerformanceTier::recommend(record.performance_score);

    println!("\n=== Device Capability Profile ===\n");
    println!("CPU Cores: {}", record.cpu_cores);
    println!("Memory: {}GB", record.memory_gb);
    println!(
        "Graphics: {}",
        if record.supports_advanced_graphics {
            "advanced"
        } else if record.supports_basic_graphics {
            "basic"
        } else {
            "unsupported"
        }
    );
    println!("GPU: {} ({})", record.gpu.renderer, record.gpu.vendor);
    println!(
        "Screen: {}x{} @ {:.1}x",
        record.screen.width, record.screen.height, record.pixel_ratio
    );
    match &record.network {
        Some(network) => println!(
            "Network: {} ({:.1} Mbps, {}ms RTT)",
            network.effective_type, network.downlink_mbps, network.round_trip_ms
        ),
        None => println!("Network: not introspectable (assumed good)"),
    }
    println!("Device Class: {:?}", record.device_class);

    if args.detailed {
        println!("\n=== Probe Signals ===");
        println!("Descriptor: {}", record.descriptor);
        println!("Graphics API: {}", record.gpu.api_version);
        println!("Shading Language: {}", record.gpu.shading_language_version);
        println!("Color Depth: {}-bit", record.color_depth);
        println!(
            "Available Screen: {}x{}",
            record.screen.avail_width, record.screen.avail_height
        );
    }

    println!(
        "\nScore: {}/12  ->  Recommended: {} ({})",
        record.performance_score,
        recommended,
        recommended.description()
    );

    Ok(())
}

/// Execute the recommend command
pub fn recommend(format: &OutputFormat) -> Result<()> {
    let record = probe_host();
    let recommended = PerformanceTier::recommend(record.performance_score);
    let config = TierConfig::for_tier(recommended);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("\n=== Recommended Tier ===\n");
    println!("Tier: {} ({})", recommended, config.description);
    println!("Score: {}/12", record.performance_score);

    print_budget(config);
    Ok(())
}

/// Print the fidelity budget for a tier config
pub fn print_budget(config: &TierConfig) {
    println!("\n=== Fidelity Budget ===");
    println!(
        "Fluid Simulation: {} sim / {} dye",
        config.fluid.sim_resolution, config.fluid.dye_resolution
    );
    println!("Pressure Iterations: {}", config.fluid.pressure_iterations);
    println!("Target FPS: {}", config.fluid.target_fps);
    println!(
        "Shading: {}",
        if config.fluid.shading {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("Quality Level: {}", config.quality_level());
    println!(
        "Animations: {}",
        if config.animations.reduced_motion {
            "reduced motion"
        } else if config.animations.enable_advanced_effects {
            "full (advanced effects)"
        } else {
            "standard"
        }
    );
}

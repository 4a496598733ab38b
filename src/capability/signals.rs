// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Raw environment signal sources
//!
//! `SignalSource` is the seam between platform introspection and the
//! estimation heuristics: the prober only ever sees this trait, so the
//! fragile parts (descriptor strings, adapter enumeration) can be swapped
//! for better platform APIs without touching scoring or tier logic.

use std::panic::{catch_unwind, AssertUnwindSafe};

use sysinfo::System;
use tracing::debug;

use super::record::{GpuDescriptor, NetworkInfo, ScreenGeometry};

/// Result of the throwaway graphics-adapter probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsProbe {
    /// Any usable adapter was acquired
    pub basic: bool,
    /// The adapter is fully compliant with the current API level
    pub advanced: bool,
    pub gpu: GpuDescriptor,
}

impl GraphicsProbe {
    /// Probe outcome when no adapter is available
    pub fn unsupported() -> Self {
        GraphicsProbe {
            basic: false,
            advanced: false,
            gpu: GpuDescriptor::default(),
        }
    }
}

/// Read-only environment signals. Every read is best-effort; `None` means
/// the platform does not expose the signal.
pub trait SignalSource: Send + Sync {
    fn cpu_cores(&self) -> Option<usize>;
    fn memory_gb(&self) -> Option<u64>;
    /// Environment descriptor string matched by the estimation heuristics
    fn descriptor(&self) -> String;
    fn graphics(&self) -> GraphicsProbe;
    fn network(&self) -> Option<NetworkInfo>;
    fn screen(&self) -> Option<ScreenGeometry>;
    fn pixel_ratio(&self) -> Option<f64>;
    fn color_depth(&self) -> Option<u32>;
}

/// Signals read from the native host via sysinfo plus a throwaway wgpu
/// adapter. Screen geometry and connection introspection are not exposed
/// natively; the embedding shell reports those through [`ReportedSignals`].
pub struct HostSignals {
    cores: Option<usize>,
    memory_gb: Option<u64>,
    descriptor: String,
}

impl HostSignals {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cores = match sys.cpus().len() {
            0 => None,
            n => Some(n),
        };

        let memory_bytes = sys.total_memory();
        let memory_gb = if memory_bytes == 0 {
            None
        } else {
            Some(memory_bytes / (1024 * 1024 * 1024))
        };

        let os = System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| "Unknown OS".to_string());
        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().to_string())
            .unwrap_or_else(|| "Unknown CPU".to_string());
        let descriptor = format!("{}; {}", os, cpu_brand);

        HostSignals {
            cores,
            memory_gb,
            descriptor,
        }
    }
}

impl Default for HostSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSource for HostSignals {
    fn cpu_cores(&self) -> Option<usize> {
        self.cores
    }

    fn memory_gb(&self) -> Option<u64> {
        self.memory_gb
    }

    fn descriptor(&self) -> String {
        self.descriptor.clone()
    }

    fn graphics(&self) -> GraphicsProbe {
        probe_adapter()
    }

    fn network(&self) -> Option<NetworkInfo> {
        None
    }

    fn screen(&self) -> Option<ScreenGeometry> {
        None
    }

    fn pixel_ratio(&self) -> Option<f64> {
        None
    }

    fn color_depth(&self) -> Option<u32> {
        None
    }
}

/// Acquire and discard a graphics adapter to learn what the device supports.
///
/// Broken drivers can abort adapter enumeration outright, so the whole probe
/// runs under `catch_unwind` and any failure reads as "no support".
fn probe_adapter() -> GraphicsProbe {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(
            instance.request_adapter(&wgpu::RequestAdapterOptions::default()),
        )
        .ok()?;
        let advanced = adapter.get_downlevel_capabilities().is_webgpu_compliant();
        Some((adapter.get_info(), advanced))
    }));

    match outcome {
        Ok(Some((info, advanced))) => GraphicsProbe {
            basic: true,
            advanced,
            gpu: describe_adapter(&info),
        },
        Ok(None) => {
            debug!("no graphics adapter available");
            GraphicsProbe::unsupported()
        }
        Err(_) => {
            debug!("graphics adapter enumeration panicked; treating as unsupported");
            GraphicsProbe::unsupported()
        }
    }
}

fn describe_adapter(info: &wgpu::AdapterInfo) -> GpuDescriptor {
    let renderer = if info.name.is_empty() {
        "Unknown".to_string()
    } else {
        info.name.clone()
    };

    let api_version = if info.driver_info.is_empty() {
        info.backend.to_str().to_string()
    } else {
        format!("{} ({})", info.backend.to_str(), info.driver_info)
    };

    GpuDescriptor {
        vendor: vendor_name(info.vendor).to_string(),
        renderer,
        api_version,
        shading_language_version: "WGSL".to_string(),
    }
}

/// Map a PCI vendor id to a display name.
fn vendor_name(vendor: u32) -> &'static str {
    match vendor {
        0x10de => "NVIDIA",
        0x1002 => "AMD",
        0x8086 => "Intel",
        0x106b => "Apple",
        0x13b5 => "ARM",
        0x5143 => "Qualcomm",
        _ => "Unknown",
    }
}

/// Fully injected signals, used by the embedding shell (which sees the real
/// screen, connection, and user agent) and by tests.
#[derive(Debug, Clone)]
pub struct ReportedSignals {
    pub cpu_cores: Option<usize>,
    pub memory_gb: Option<u64>,
    pub descriptor: String,
    pub graphics: GraphicsProbe,
    pub network: Option<NetworkInfo>,
    pub screen: Option<ScreenGeometry>,
    pub pixel_ratio: Option<f64>,
    pub color_depth: Option<u32>,
}

impl Default for ReportedSignals {
    fn default() -> Self {
        ReportedSignals {
            cpu_cores: None,
            memory_gb: None,
            descriptor: String::new(),
            graphics: GraphicsProbe::unsupported(),
            network: None,
            screen: None,
            pixel_ratio: None,
            color_depth: None,
        }
    }
}

impl SignalSource for ReportedSignals {
    fn cpu_cores(&self) -> Option<usize> {
        self.cpu_cores
    }

    fn memory_gb(&self) -> Option<u64> {
        self.memory_gb
    }

    fn descriptor(&self) -> String {
        self.descriptor.clone()
    }

    fn graphics(&self) -> GraphicsProbe {
        self.graphics.clone()
    }

    fn network(&self) -> Option<NetworkInfo> {
        self.network.clone()
    }

    fn screen(&self) -> Option<ScreenGeometry> {
        self.screen
    }

    fn pixel_ratio(&self) -> Option<f64> {
        self.pixel_ratio
    }

    fn color_depth(&self) -> Option<u32> {
        self.color_depth
    }
}

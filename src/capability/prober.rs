// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability probing and heuristic estimation
//!
//! Field rules, in priority order: prefer a platform-reported value, else
//! pattern-match the environment descriptor against known CPU families,
//! else fall back to a coarse device-class default. Probing never fails;
//! each signal degrades to a documented default on its own.

use regex::Regex;
use tracing::debug;

use super::record::{CapabilityRecord, DeviceClass, ScreenGeometry};
use super::signals::SignalSource;
use crate::score;

/// Screen assumed when the platform reports no geometry
const DEFAULT_SCREEN: ScreenGeometry = ScreenGeometry {
    width: 1920,
    height: 1080,
    avail_width: 1920,
    avail_height: 1080,
};

const DEFAULT_PIXEL_RATIO: f64 = 1.0;
const DEFAULT_COLOR_DEPTH: u32 = 24;

/// Compiled descriptor-string patterns.
///
/// Inherently fragile and best-effort; isolated here so the whole matching
/// layer can be replaced without touching scoring or tier logic.
struct Heuristics {
    mobile: Regex,
    tablet: Regex,
    intel_core: Regex,
    intel_high: Regex,
    intel_low: Regex,
    ryzen: Regex,
    ryzen_high: Regex,
    ryzen_low: Regex,
    apple_silicon: Regex,
    pro_workstation: Regex,
    gaming_brand: Regex,
}

impl Heuristics {
    fn new() -> Self {
        Heuristics {
            mobile: Regex::new(r"(?i)Android|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
                .unwrap(),
            tablet: Regex::new(r"(?i)iPad|Android").unwrap(),
            intel_core: Regex::new(r"Intel.*Core.*i[3579]").unwrap(),
            intel_high: Regex::new(r"Core.*i[79]").unwrap(),
            intel_low: Regex::new(r"Core.*i[35]").unwrap(),
            ryzen: Regex::new(r"AMD.*Ryzen").unwrap(),
            ryzen_high: Regex::new(r"Ryzen.*[79]").unwrap(),
            ryzen_low: Regex::new(r"Ryzen.*[35]").unwrap(),
            apple_silicon: Regex::new(r"Apple M[1-9]").unwrap(),
            pro_workstation: Regex::new(r"MacBook Pro|Mac Pro|iMac Pro").unwrap(),
            gaming_brand: Regex::new(r"Gaming|ROG|Alienware|Predator").unwrap(),
        }
    }
}

/// Probes a [`SignalSource`] into an immutable [`CapabilityRecord`].
///
/// Construct one at application start and inject it into whatever owns UI
/// state; there is deliberately no ambient singleton.
pub struct Prober {
    source: Box<dyn SignalSource>,
    heuristics: Heuristics,
}

impl Prober {
    pub fn new(source: Box<dyn SignalSource>) -> Self {
        Prober {
            source,
            heuristics: Heuristics::new(),
        }
    }

    /// Take a capability snapshot. Synchronous and infallible; any signal
    /// the platform withholds degrades to its documented default.
    pub fn probe(&self) -> CapabilityRecord {
        let descriptor = self.source.descriptor();
        let screen = self.source.screen().unwrap_or(DEFAULT_SCREEN);
        let device_class = self.classify_device(&descriptor);
        let is_tablet = self.is_tablet(&descriptor, &screen);

        let cpu_cores = self.estimate_cores(&descriptor, device_class, is_tablet);
        let memory_gb = self.estimate_memory(&descriptor, device_class, is_tablet, &screen);

        let graphics = self.source.graphics();
        let network = self.source.network();
        let pixel_ratio = self.source.pixel_ratio().unwrap_or(DEFAULT_PIXEL_RATIO);
        let color_depth = self.source.color_depth().unwrap_or(DEFAULT_COLOR_DEPTH);

        let mut record = CapabilityRecord {
            cpu_cores,
            memory_gb,
            supports_basic_graphics: graphics.basic,
            supports_advanced_graphics: graphics.advanced,
            gpu: graphics.gpu,
            network,
            device_class,
            screen,
            pixel_ratio,
            color_depth,
            descriptor,
            performance_score: 0,
        };
        record.performance_score = score::compute(&record);

        debug!(
            cores = record.cpu_cores,
            memory_gb = record.memory_gb,
            score = record.performance_score,
            "capability probe complete"
        );
        record
    }

    fn classify_device(&self, descriptor: &str) -> DeviceClass {
        if self.heuristics.mobile.is_match(descriptor) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    fn is_tablet(&self, descriptor: &str, screen: &ScreenGeometry) -> bool {
        self.heuristics.tablet.is_match(descriptor) && screen.width >= 768
    }

    /// Core count: reported, else CPU-family guess, else device-class default.
    fn estimate_cores(
        &self,
        descriptor: &str,
        device_class: DeviceClass,
        is_tablet: bool,
    ) -> usize {
        if let Some(cores) = self.source.cpu_cores() {
            return cores.max(1);
        }

        if self.heuristics.intel_core.is_match(descriptor) {
            if self.heuristics.intel_high.is_match(descriptor) {
                return 8; // i7, i9
            }
            if self.heuristics.intel_low.is_match(descriptor) {
                return 6; // i3, i5
            }
        }

        if self.heuristics.ryzen.is_match(descriptor) {
            if self.heuristics.ryzen_high.is_match(descriptor) {
                return 12; // Ryzen 7, 9
            }
            if self.heuristics.ryzen_low.is_match(descriptor) {
                return 8; // Ryzen 3, 5
            }
        }

        if self.heuristics.apple_silicon.is_match(descriptor) {
            return 8;
        }

        if device_class == DeviceClass::Mobile {
            if is_tablet {
                return 6;
            }
            return 4;
        }
        8 // capable desktop assumption
    }

    /// Memory estimate in GB, with the corrective override for reported
    /// values (see [`Prober::correct_reported_memory`]).
    fn estimate_memory(
        &self,
        descriptor: &str,
        device_class: DeviceClass,
        is_tablet: bool,
        screen: &ScreenGeometry,
    ) -> u64 {
        if let Some(reported) = self.source.memory_gb() {
            return Self::correct_reported_memory(reported, device_class, screen);
        }

        // High-end CPU families and device markers usually pair with 16GB+.
        if self.heuristics.intel_core.is_match(descriptor)
            && self.heuristics.intel_high.is_match(descriptor)
        {
            return 16;
        }
        if self.heuristics.ryzen.is_match(descriptor)
            && self.heuristics.ryzen_high.is_match(descriptor)
        {
            return 16;
        }
        if self.heuristics.pro_workstation.is_match(descriptor)
            || self.heuristics.gaming_brand.is_match(descriptor)
            || self.heuristics.apple_silicon.is_match(descriptor)
        {
            return 16;
        }

        // 4K+ displays are usually paired with more RAM.
        if screen.area() > 3_000_000 {
            return 16;
        }

        if device_class == DeviceClass::Mobile {
            if is_tablet {
                return 6;
            }
            return 4;
        }
        16 // modern desktop assumption
    }

    /// Reported memory values on desktops are assumed to undercount: a value
    /// of exactly 8 on a desktop with a 1080p+ screen is rounded up to the
    /// next common tier. Preserved verbatim as an isolated rule.
    fn correct_reported_memory(
        reported: u64,
        device_class: DeviceClass,
        screen: &ScreenGeometry,
    ) -> u64 {
        if reported == 8 && device_class == DeviceClass::Desktop && screen.area() > 1_500_000 {
            return 16;
        }
        reported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::record::NetworkInfo;
    use crate::capability::signals::{GraphicsProbe, ReportedSignals};
    use crate::tier::PerformanceTier;

    fn prober(signals: ReportedSignals) -> Prober {
        Prober::new(Box::new(signals))
    }

    fn screen(width: u32, height: u32) -> ScreenGeometry {
        ScreenGeometry {
            width,
            height,
            avail_width: width,
            avail_height: height,
        }
    }

    fn supported_graphics(advanced: bool) -> GraphicsProbe {
        GraphicsProbe {
            basic: true,
            advanced,
            gpu: Default::default(),
        }
    }

    // ===== reported-value priority =====

    #[test]
    fn test_reported_values_win_over_heuristics() {
        let record = prober(ReportedSignals {
            cpu_cores: Some(2),
            memory_gb: Some(4),
            descriptor: "Windows NT 10.0; Intel Core i9-13900K".to_string(),
            ..Default::default()
        })
        .probe();

        assert_eq!(record.cpu_cores, 2);
        assert_eq!(record.memory_gb, 4);
    }

    #[test]
    fn test_reported_zero_cores_clamped_to_one() {
        let record = prober(ReportedSignals {
            cpu_cores: Some(0),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.cpu_cores, 1);
    }

    // ===== descriptor heuristics =====

    #[test]
    fn test_intel_i7_estimate() {
        let record = prober(ReportedSignals {
            descriptor: "Windows NT 10.0; Intel(R) Core(TM) i7-1165G7".to_string(),
            screen: Some(screen(1366, 768)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.cpu_cores, 8);
        assert_eq!(record.memory_gb, 16);
    }

    #[test]
    fn test_intel_i5_estimate() {
        let record = prober(ReportedSignals {
            descriptor: "Windows NT 10.0; Intel Core i5-8250U".to_string(),
            screen: Some(screen(1366, 768)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.cpu_cores, 6);
        // i5 carries no high-end memory marker; small-screen desktop default.
        assert_eq!(record.memory_gb, 16);
    }

    #[test]
    fn test_ryzen_7_estimate() {
        let record = prober(ReportedSignals {
            descriptor: "Linux; AMD Ryzen 7 5800X".to_string(),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.cpu_cores, 12);
        assert_eq!(record.memory_gb, 16);
    }

    #[test]
    fn test_apple_silicon_estimate() {
        let record = prober(ReportedSignals {
            descriptor: "macOS 14.2; Apple M2".to_string(),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.cpu_cores, 8);
        assert_eq!(record.memory_gb, 16);
    }

    #[test]
    fn test_mobile_defaults() {
        let record = prober(ReportedSignals {
            descriptor: "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".to_string(),
            screen: Some(screen(390, 844)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.device_class, DeviceClass::Mobile);
        assert_eq!(record.cpu_cores, 4);
        assert_eq!(record.memory_gb, 4);
    }

    #[test]
    fn test_tablet_defaults() {
        let record = prober(ReportedSignals {
            descriptor: "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)".to_string(),
            screen: Some(screen(1024, 1366)),
            ..Default::default()
        })
        .probe();
        // Tablets classify as mobile but get the medium device defaults.
        assert_eq!(record.device_class, DeviceClass::Mobile);
        assert_eq!(record.cpu_cores, 6);
        assert_eq!(record.memory_gb, 6);
    }

    #[test]
    fn test_unknown_desktop_defaults() {
        let record = prober(ReportedSignals {
            descriptor: "Some Obscure Workstation".to_string(),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.device_class, DeviceClass::Desktop);
        assert_eq!(record.cpu_cores, 8);
        assert_eq!(record.memory_gb, 16);
    }

    // ===== corrective memory override =====

    #[test]
    fn test_reported_8gb_rounds_up_on_high_res_desktop() {
        let record = prober(ReportedSignals {
            memory_gb: Some(8),
            descriptor: "Windows NT 10.0".to_string(),
            screen: Some(screen(1920, 1080)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.memory_gb, 16);
    }

    #[test]
    fn test_reported_8gb_kept_on_small_screen() {
        let record = prober(ReportedSignals {
            memory_gb: Some(8),
            descriptor: "Windows NT 10.0".to_string(),
            screen: Some(screen(1366, 768)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.memory_gb, 8);
    }

    #[test]
    fn test_reported_8gb_kept_on_mobile() {
        let record = prober(ReportedSignals {
            memory_gb: Some(8),
            descriptor: "Android 14; Pixel 8 Pro".to_string(),
            screen: Some(screen(1344, 2992)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.memory_gb, 8);
    }

    #[test]
    fn test_reported_16gb_untouched() {
        let record = prober(ReportedSignals {
            memory_gb: Some(16),
            descriptor: "Windows NT 10.0".to_string(),
            screen: Some(screen(2560, 1440)),
            ..Default::default()
        })
        .probe();
        assert_eq!(record.memory_gb, 16);
    }

    // ===== defaults and idempotence =====

    #[test]
    fn test_missing_signals_degrade_to_defaults() {
        let record = prober(ReportedSignals::default()).probe();
        assert_eq!(record.screen, DEFAULT_SCREEN);
        assert_eq!(record.pixel_ratio, DEFAULT_PIXEL_RATIO);
        assert_eq!(record.color_depth, DEFAULT_COLOR_DEPTH);
        assert_eq!(record.gpu.vendor, "Unknown");
        assert!(record.network.is_none());
    }

    #[test]
    fn test_probe_is_idempotent() {
        let prober = prober(ReportedSignals {
            cpu_cores: Some(8),
            memory_gb: Some(16),
            descriptor: "Linux; AMD Ryzen 9 5900X".to_string(),
            graphics: supported_graphics(true),
            screen: Some(screen(2560, 1440)),
            ..Default::default()
        });
        assert_eq!(prober.probe(), prober.probe());
    }

    // ===== worked scoring scenarios =====

    #[test]
    fn test_scenario_high_end_desktop_is_ultra() {
        // cores=8, memory=16, advanced graphics, connection unknown,
        // desktop, screen area 2,200,000 -> 3+3+2+1+0+1 = 10 -> ultra
        let record = prober(ReportedSignals {
            cpu_cores: Some(8),
            memory_gb: Some(16),
            descriptor: "Windows NT 10.0".to_string(),
            graphics: supported_graphics(true),
            screen: Some(screen(2000, 1100)),
            ..Default::default()
        })
        .probe();

        assert_eq!(record.performance_score, 10);
        assert_eq!(
            PerformanceTier::recommend(record.performance_score),
            PerformanceTier::Ultra
        );
    }

    #[test]
    fn test_scenario_old_phone_is_low() {
        // cores=2, memory=2, basic-only graphics, 3g, mobile,
        // screen area 800,000 -> 1+1+1+1-1-1 = 2 -> low
        let record = prober(ReportedSignals {
            cpu_cores: Some(2),
            memory_gb: Some(2),
            descriptor: "Android 9; SM-J415F".to_string(),
            graphics: supported_graphics(false),
            network: Some(NetworkInfo {
                effective_type: "3g".to_string(),
                downlink_mbps: 0.7,
                round_trip_ms: 400,
            }),
            screen: Some(screen(1000, 800)),
            ..Default::default()
        })
        .probe();

        assert_eq!(record.performance_score, 2);
        assert_eq!(
            PerformanceTier::recommend(record.performance_score),
            PerformanceTier::Low
        );
    }
}

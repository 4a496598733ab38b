// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device capability probing
//!
//! Reads ambient environment signals through the [`SignalSource`] seam and
//! reduces them to an immutable [`CapabilityRecord`] snapshot used for tier
//! recommendation.

pub mod prober;
pub mod record;
pub mod signals;

pub use prober::Prober;
pub use record::{CapabilityRecord, DeviceClass, GpuDescriptor, NetworkInfo, ScreenGeometry};
pub use signals::{GraphicsProbe, HostSignals, ReportedSignals, SignalSource};

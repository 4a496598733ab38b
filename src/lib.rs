// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Fidelity - device performance tier detection and adaptive effect budgets.
//!
//! This crate exposes the shared runtime used by:
//! - the `fidelity` CLI (`src/main.rs`)
//! - the portfolio shell embedding the selection flow
//!
//! Architecture highlights:
//! - `capability`: environment signal probing and the capability snapshot
//! - `score`: pure additive capability scoring
//! - `tier`: tier symbols, recommendation thresholds, and fidelity budgets
//! - `store`: persisted visitor preferences
//! - `controller`: the selection-flow state machine and effect seam

pub mod capability;
pub mod cli;
pub mod commands;
pub mod controller;
pub mod error;
pub mod score;
pub mod store;
pub mod tier;

pub use capability::{CapabilityRecord, HostSignals, Prober, ReportedSignals, SignalSource};
pub use controller::{
    ApplyOutcome, EffectHost, NullEffectHost, PerformanceController, PerformanceStatus,
    SelectionState,
};
pub use error::{FidelityError, Result};
pub use store::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use tier::{PerformanceTier, TierConfig};

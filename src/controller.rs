// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Selection-flow state machine
//!
//! Owns the probed capability snapshot, the recommended and chosen tiers,
//! and the persisted preference. Flow: initialization either settles on a
//! valid persisted tier or prompts the visitor; confirming a tier (or
//! accepting the recommendation) enters a timed `Applying` transition that
//! rebuilds the effect with the new budget, persists the choice, and
//! settles. Initialization failure falls back to Medium and still reports
//! the controller initialized; a visitor is never left on a broken screen.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::capability::{CapabilityRecord, Prober};
use crate::error::{FidelityError, Result};
use crate::store::PreferenceStore;
use crate::tier::{PerformanceTier, TierConfig};

/// How long the `Applying` status stays visible while the effect rebuilds
pub const APPLY_DELAY: Duration = Duration::from_millis(500);

/// Lifecycle seam for the decorative effect.
///
/// The effect's internal GPU resources cannot be reparameterized in place;
/// `reconfigure` tears them down and rebuilds them with the new budget.
pub trait EffectHost: Send + Sync {
    fn reconfigure(&self, config: &'static TierConfig);
}

/// Effect host used when no effect is attached (headless CLI, tests).
pub struct NullEffectHost;

impl EffectHost for NullEffectHost {
    fn reconfigure(&self, config: &'static TierConfig) {
        debug!(tier = %config.tier, "no effect attached; reconfigure is a no-op");
    }
}

/// Observable position in the selection flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Uninitialized,
    /// No valid persisted preference; the selection surface is open
    PromptingUser,
    /// A tier change is in flight
    Applying,
    Settled(PerformanceTier),
}

/// Result of a tier-change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(PerformanceTier),
    /// Another change was already in flight; this request was dropped
    Ignored,
}

/// Snapshot of everything the consuming UI reads
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceStatus {
    pub current_tier: PerformanceTier,
    pub recommended_tier: PerformanceTier,
    pub is_initialized: bool,
    pub is_applying: bool,
    /// True while the one-time selection prompt should be shown
    pub needs_selection: bool,
    pub is_low: bool,
    pub is_medium: bool,
    pub is_high: bool,
    pub is_ultra: bool,
    pub capabilities: Option<CapabilityRecord>,
}

struct ControllerState {
    state: SelectionState,
    current: PerformanceTier,
    recommended: PerformanceTier,
    capabilities: Option<CapabilityRecord>,
    initialized: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        ControllerState {
            state: SelectionState::Uninitialized,
            current: PerformanceTier::Medium,
            recommended: PerformanceTier::Medium,
            capabilities: None,
            initialized: false,
        }
    }
}

/// Owns the prober, the preference store, and the effect seam.
///
/// Construct once at application start and share; all methods take `&self`.
pub struct PerformanceController {
    prober: Prober,
    store: Box<dyn PreferenceStore>,
    effect: Box<dyn EffectHost>,
    inner: Mutex<ControllerState>,
}

impl PerformanceController {
    pub fn new(
        prober: Prober,
        store: Box<dyn PreferenceStore>,
        effect: Box<dyn EffectHost>,
    ) -> Self {
        PerformanceController {
            prober,
            store,
            effect,
            inner: Mutex::new(ControllerState::default()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ControllerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Probe the device, compute the recommendation, and settle on a valid
    /// persisted tier or open the selection prompt.
    ///
    /// Never fails: any probing failure degrades to `Settled(Medium)` with
    /// that preference persisted, and the controller reports itself
    /// initialized either way.
    pub fn initialize(&self) {
        if let Err(e) = self.try_initialize() {
            warn!(error = %e, "initialization failed; falling back to medium tier");
            if let Err(persist_err) = self.store.set_tier(PerformanceTier::Medium) {
                warn!(error = %persist_err, "failed to persist fallback tier");
            }
            let mut inner = self.guard();
            inner.capabilities = None;
            inner.recommended = PerformanceTier::Medium;
            inner.current = PerformanceTier::Medium;
            inner.state = SelectionState::Settled(PerformanceTier::Medium);
            inner.initialized = true;
        }
    }

    fn try_initialize(&self) -> Result<()> {
        // A faulty signal source can panic; contain it here so the fallback
        // path above still leaves the controller usable.
        let record = catch_unwind(AssertUnwindSafe(|| self.prober.probe()))
            .map_err(|_| FidelityError::Probe("capability probe panicked".to_string()))?;
        let recommended = PerformanceTier::recommend(record.performance_score);

        let saved = match self.store.tier() {
            Ok(saved) => saved,
            Err(e) => {
                debug!(error = %e, "preference read failed; treating as no preference");
                None
            }
        };

        let mut inner = self.guard();
        inner.capabilities = Some(record);
        inner.recommended = recommended;
        match saved {
            Some(tier) => {
                inner.current = tier;
                inner.state = SelectionState::Settled(tier);
                info!(%tier, %recommended, "restored persisted tier");
            }
            None => {
                // Recommended tier stands in for display until the visitor
                // confirms a choice.
                inner.current = recommended;
                inner.state = SelectionState::PromptingUser;
                info!(%recommended, "no persisted tier; prompting for selection");
            }
        }
        inner.initialized = true;
        Ok(())
    }

    /// Confirm a tier. Runs the timed `Applying` transition, rebuilds the
    /// effect with the new budget, and persists the choice.
    ///
    /// A request made while another change is in flight is dropped and
    /// reported as [`ApplyOutcome::Ignored`].
    pub async fn select_tier(&self, tier: PerformanceTier) -> Result<ApplyOutcome> {
        {
            let mut inner = self.guard();
            if !inner.initialized {
                return Err(FidelityError::Controller(
                    "select_tier called before initialize".to_string(),
                ));
            }
            if inner.state == SelectionState::Applying {
                debug!(%tier, "tier change ignored; another change is in flight");
                return Ok(ApplyOutcome::Ignored);
            }
            inner.state = SelectionState::Applying;
        }

        info!(%tier, "applying performance tier");

        // Keep the applying status visible long enough for the UI to show
        // the transition instead of a half-rebuilt effect.
        tokio::time::sleep(APPLY_DELAY).await;

        self.effect.reconfigure(TierConfig::for_tier(tier));
        if let Err(e) = self.store.set_tier(tier) {
            warn!(error = %e, "failed to persist tier preference");
        }

        let mut inner = self.guard();
        inner.current = tier;
        inner.state = SelectionState::Settled(tier);
        Ok(ApplyOutcome::Applied(tier))
    }

    /// Accept the probed recommendation outright.
    pub async fn accept_recommended(&self) -> Result<ApplyOutcome> {
        let recommended = {
            let inner = self.guard();
            if !inner.initialized {
                return Err(FidelityError::Controller(
                    "accept_recommended called before initialize".to_string(),
                ));
            }
            inner.recommended
        };
        self.select_tier(recommended).await
    }

    /// Clear the persisted tier so the next initialization re-prompts.
    pub fn clear_preference(&self) -> Result<()> {
        self.store.clear_tier()
    }

    pub fn state(&self) -> SelectionState {
        self.guard().state
    }

    pub fn current_tier(&self) -> PerformanceTier {
        self.guard().current
    }

    pub fn recommended_tier(&self) -> PerformanceTier {
        self.guard().recommended
    }

    /// The raw capability snapshot, when initialization probed one.
    pub fn capabilities(&self) -> Option<CapabilityRecord> {
        self.guard().capabilities.clone()
    }

    /// Fidelity budget for the active tier.
    pub fn current_config(&self) -> &'static TierConfig {
        TierConfig::for_tier(self.guard().current)
    }

    /// Full snapshot for the consuming UI.
    pub fn status(&self) -> PerformanceStatus {
        let inner = self.guard();
        PerformanceStatus {
            current_tier: inner.current,
            recommended_tier: inner.recommended,
            is_initialized: inner.initialized,
            is_applying: inner.state == SelectionState::Applying,
            needs_selection: inner.state == SelectionState::PromptingUser,
            is_low: inner.current == PerformanceTier::Low,
            is_medium: inner.current == PerformanceTier::Medium,
            is_high: inner.current == PerformanceTier::High,
            is_ultra: inner.current == PerformanceTier::Ultra,
            capabilities: inner.capabilities.clone(),
        }
    }

    // ===== cursor-effect preference =====

    /// Whether the decorative cursor effect is enabled. Defaults to true.
    pub fn cursor_enabled(&self) -> bool {
        match self.store.cursor_enabled() {
            Ok(saved) => saved.unwrap_or(true),
            Err(e) => {
                debug!(error = %e, "cursor preference read failed; defaulting to enabled");
                true
            }
        }
    }

    /// Flip the cursor-effect preference and return the new value.
    pub fn toggle_cursor(&self) -> Result<bool> {
        let enabled = !self.cursor_enabled();
        self.store.set_cursor_enabled(enabled)?;
        Ok(enabled)
    }

    pub fn set_cursor_enabled(&self, enabled: bool) -> Result<()> {
        self.store.set_cursor_enabled(enabled)
    }
}

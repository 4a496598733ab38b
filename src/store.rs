// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Visitor preference persistence
//!
//! Two independent last-write-wins slots: the chosen performance tier and
//! the cursor-effect toggle. Absence means "no preference recorded"; a
//! stored value that matches no known symbol reads back as absent rather
//! than failing.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FidelityError, Result};
use crate::tier::PerformanceTier;

/// Abstract preference slots, so the controller can run against the file
/// store, an in-memory store in tests, or whatever the shell provides.
pub trait PreferenceStore: Send + Sync {
    fn tier(&self) -> Result<Option<PerformanceTier>>;
    fn set_tier(&self, tier: PerformanceTier) -> Result<()>;
    fn clear_tier(&self) -> Result<()>;
    fn cursor_enabled(&self) -> Result<Option<bool>>;
    fn set_cursor_enabled(&self, enabled: bool) -> Result<()>;
}

/// On-disk layout. Both slots are stored as strings: the tier as its symbol,
/// the cursor toggle as a boolean-like string, matching the wire format the
/// shell persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    performance_tier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cursor_enabled: Option<String>,
}

fn parse_tier_slot(raw: &str) -> Option<PerformanceTier> {
    match PerformanceTier::from_str(raw) {
        Ok(tier) => Some(tier),
        Err(_) => {
            warn!(value = raw, "ignoring unrecognized persisted tier");
            None
        }
    }
}

fn parse_cursor_slot(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            warn!(value = other, "ignoring unrecognized cursor preference");
            None
        }
    }
}

/// JSON-file preference store under the fidelity home directory.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Store at the default location (`~/.fidelity/preferences.json`, or
    /// `$FIDELITY_HOME/preferences.json` when set).
    pub fn new() -> Self {
        Self::at(Self::default_path())
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        FilePreferences { path }
    }

    /// Get the fidelity home directory (~/.fidelity or $FIDELITY_HOME).
    pub fn fidelity_home() -> PathBuf {
        if let Ok(home) = std::env::var("FIDELITY_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fidelity")
    }

    /// Default preference file path.
    pub fn default_path() -> PathBuf {
        Self::fidelity_home().join("preferences.json")
    }

    fn load(&self) -> Result<PreferenceFile> {
        if !self.path.exists() {
            return Ok(PreferenceFile::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| FidelityError::Store(format!("read {}: {}", self.path.display(), e)))?;
        match serde_json::from_str(&content) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                // Corrupt file reads as empty; the next save overwrites it.
                warn!(path = %self.path.display(), error = %e, "corrupt preference file");
                Ok(PreferenceFile::default())
            }
        }
    }

    fn save(&self, prefs: &PreferenceFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, content)
            .map_err(|e| FidelityError::Store(format!("write {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

impl Default for FilePreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferences {
    fn tier(&self) -> Result<Option<PerformanceTier>> {
        Ok(self
            .load()?
            .performance_tier
            .as_deref()
            .and_then(parse_tier_slot))
    }

    fn set_tier(&self, tier: PerformanceTier) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.performance_tier = Some(tier.as_str().to_string());
        self.save(&prefs)
    }

    fn clear_tier(&self) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.performance_tier = None;
        self.save(&prefs)
    }

    fn cursor_enabled(&self) -> Result<Option<bool>> {
        Ok(self
            .load()?
            .cursor_enabled
            .as_deref()
            .and_then(parse_cursor_slot))
    }

    fn set_cursor_enabled(&self, enabled: bool) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.cursor_enabled = Some(enabled.to_string());
        self.save(&prefs)
    }
}

/// In-memory preference store for tests and embedded use.
#[derive(Default)]
pub struct MemoryPreferences {
    inner: Mutex<PreferenceFile>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw tier slot, valid or not.
    pub fn with_raw_tier(raw: &str) -> Self {
        let store = Self::new();
        store.guard().performance_tier = Some(raw.to_string());
        store
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, PreferenceFile> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn tier(&self) -> Result<Option<PerformanceTier>> {
        Ok(self
            .guard()
            .performance_tier
            .as_deref()
            .and_then(parse_tier_slot))
    }

    fn set_tier(&self, tier: PerformanceTier) -> Result<()> {
        self.guard().performance_tier = Some(tier.as_str().to_string());
        Ok(())
    }

    fn clear_tier(&self) -> Result<()> {
        self.guard().performance_tier = None;
        Ok(())
    }

    fn cursor_enabled(&self) -> Result<Option<bool>> {
        Ok(self
            .guard()
            .cursor_enabled
            .as_deref()
            .and_then(parse_cursor_slot))
    }

    fn set_cursor_enabled(&self, enabled: bool) -> Result<()> {
        self.guard().cursor_enabled = Some(enabled.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_store() -> (TempDir, FilePreferences) {
        let dir = TempDir::new().unwrap();
        let store = FilePreferences::at(dir.path().join("preferences.json"));
        (dir, store)
    }

    // ===== file store =====

    #[test]
    fn test_missing_file_means_no_preference() {
        let (_dir, store) = file_store();
        assert_eq!(store.tier().unwrap(), None);
        assert_eq!(store.cursor_enabled().unwrap(), None);
    }

    #[test]
    fn test_tier_roundtrip() {
        let (_dir, store) = file_store();
        store.set_tier(PerformanceTier::High).unwrap();
        assert_eq!(store.tier().unwrap(), Some(PerformanceTier::High));
    }

    #[test]
    fn test_clear_tier_forces_reprompt() {
        let (_dir, store) = file_store();
        store.set_tier(PerformanceTier::Ultra).unwrap();
        store.clear_tier().unwrap();
        assert_eq!(store.tier().unwrap(), None);
    }

    #[test]
    fn test_invalid_stored_tier_reads_as_absent() {
        let (_dir, store) = file_store();
        if let Some(parent) = store.path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(
            &store.path,
            r#"{"performance_tier": "hyperspeed", "cursor_enabled": "maybe"}"#,
        )
        .unwrap();
        assert_eq!(store.tier().unwrap(), None);
        assert_eq!(store.cursor_enabled().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (_dir, store) = file_store();
        if let Some(parent) = store.path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&store.path, "{ not json").unwrap();
        assert_eq!(store.tier().unwrap(), None);
    }

    #[test]
    fn test_slots_are_independent() {
        let (_dir, store) = file_store();
        store.set_tier(PerformanceTier::Low).unwrap();
        store.set_cursor_enabled(false).unwrap();
        assert_eq!(store.tier().unwrap(), Some(PerformanceTier::Low));
        assert_eq!(store.cursor_enabled().unwrap(), Some(false));

        store.clear_tier().unwrap();
        assert_eq!(store.cursor_enabled().unwrap(), Some(false));
    }

    #[test]
    fn test_cursor_stored_as_boolean_like_string() {
        let (_dir, store) = file_store();
        store.set_cursor_enabled(true).unwrap();
        let raw = std::fs::read_to_string(&store.path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["cursor_enabled"], "true");
    }

    #[test]
    fn test_last_write_wins() {
        let (_dir, store) = file_store();
        store.set_tier(PerformanceTier::Low).unwrap();
        store.set_tier(PerformanceTier::Ultra).unwrap();
        assert_eq!(store.tier().unwrap(), Some(PerformanceTier::Ultra));
    }

    // ===== memory store =====

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferences::new();
        assert_eq!(store.tier().unwrap(), None);
        store.set_tier(PerformanceTier::Medium).unwrap();
        assert_eq!(store.tier().unwrap(), Some(PerformanceTier::Medium));
        store.clear_tier().unwrap();
        assert_eq!(store.tier().unwrap(), None);
    }

    #[test]
    fn test_memory_store_with_raw_tier() {
        let valid = MemoryPreferences::with_raw_tier("high");
        assert_eq!(valid.tier().unwrap(), Some(PerformanceTier::High));

        let invalid = MemoryPreferences::with_raw_tier("hyperspeed");
        assert_eq!(invalid.tier().unwrap(), None);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Fidelity
//!
//! Probing is infallible by contract (every failing signal degrades to a
//! default), so errors here cover the persistence layer, invalid input at
//! the CLI boundary, and controller misuse.

use thiserror::Error;

/// Main error type for Fidelity operations
#[derive(Error, Debug)]
pub enum FidelityError {
    /// Capability probing aborted in a way that could not be degraded
    #[error("Probe error: {0}")]
    Probe(String),

    /// Preference store read/write errors
    #[error("Store error: {0}")]
    Store(String),

    /// A tier symbol that matches no known tier
    #[error("Unknown performance tier: {0}")]
    UnknownTier(String),

    /// Controller used before initialization
    #[error("Controller error: {0}")]
    Controller(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Fidelity operations
pub type Result<T> = std::result::Result<T, FidelityError>;

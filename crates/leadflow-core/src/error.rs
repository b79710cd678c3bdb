// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Leadflow engine.

use thiserror::Error;

/// The primary error type used across the Leadflow workspace.
#[derive(Debug, Error)]
pub enum LeadflowError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Analytics sink errors (event delivery failure). Always non-fatal to
    /// the conversation: callers log and continue.
    #[error("analytics error: {message}")]
    Analytics {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An action button identifier had no registered handler.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

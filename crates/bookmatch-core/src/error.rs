// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the bookmatch bot core.

use thiserror::Error;

use crate::types::UserId;

/// The primary error type used across all bookmatch traits and core operations.
///
/// Validation problems (bad condition input, malformed menu selections) are
/// handled locally by the dialog flows and never become a `BookmatchError`.
#[derive(Debug, Error)]
pub enum BookmatchError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Chat transport errors (delivery failure, closed channel).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A user record expected to exist was not found.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

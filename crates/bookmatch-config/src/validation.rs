// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and nonzero timeouts.

use crate::diagnostic::ConfigError;
use crate::model::BookmatchConfig;

const KNOWN_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const KNOWN_LANGUAGES: [&str; 2] = ["en", "ru"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BookmatchConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.bot.log_level.trim();
    if !KNOWN_LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "bot.log_level `{level}` is not one of: {}",
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    let lang = config.bot.default_language.trim();
    if !KNOWN_LANGUAGES.contains(&lang) {
        errors.push(ConfigError::Validation {
            message: format!(
                "bot.default_language `{lang}` is not one of: {}",
                KNOWN_LANGUAGES.join(", ")
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.session.ttl_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "session.ttl_secs must be nonzero".to_string(),
        });
    }

    if config.session.browse_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "session.browse_timeout_secs must be nonzero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

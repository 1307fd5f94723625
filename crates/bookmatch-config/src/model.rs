// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the bookmatch bot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level bookmatch configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BookmatchConfig {
    /// Bot identity and logging settings.
    #[serde(default)]
    pub bot: BotConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Session cache and browsing timeout settings.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Bot identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Display name of the bot.
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Language assigned to new users before they pick one ("en", "ru").
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            log_level: default_log_level(),
            default_language: default_language(),
        }
    }
}

fn default_bot_name() -> String {
    "bookmatch".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// SQLite storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL journal mode.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    "bookmatch.db".to_string()
}

fn default_wal_mode() -> bool {
    true
}

/// Session cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Seconds an idle session survives in the cache before eviction.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Seconds a shown browsing candidate stays actionable.
    #[serde(default = "default_browse_timeout_secs")]
    pub browse_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            browse_timeout_secs: default_browse_timeout_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    1800
}

fn default_browse_timeout_secs() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = BookmatchConfig::default();
        assert_eq!(config.bot.name, "bookmatch");
        assert_eq!(config.bot.log_level, "info");
        assert_eq!(config.bot.default_language, "en");
        assert_eq!(config.storage.database_path, "bookmatch.db");
        assert!(config.storage.wal_mode);
        assert_eq!(config.session.ttl_secs, 1800);
        assert_eq!(config.session.browse_timeout_secs, 300);
    }
}

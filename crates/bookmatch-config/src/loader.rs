// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./bookmatch.toml` > `~/.config/bookmatch/bookmatch.toml`
//! > `/etc/bookmatch/bookmatch.toml` with environment variable overrides via
//! `BOOKMATCH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BookmatchConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/bookmatch/bookmatch.toml` (system-wide)
/// 3. `~/.config/bookmatch/bookmatch.toml` (user XDG config)
/// 4. `./bookmatch.toml` (local directory)
/// 5. `BOOKMATCH_*` environment variables
pub fn load_config() -> Result<BookmatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BookmatchConfig::default()))
        .merge(Toml::file("/etc/bookmatch/bookmatch.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("bookmatch/bookmatch.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("bookmatch.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<BookmatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BookmatchConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BookmatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BookmatchConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `BOOKMATCH_STORAGE_DATABASE_PATH` must
/// map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("BOOKMATCH_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("bot_", "bot.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("session_", "session.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.bot.name, "bookmatch");
        assert_eq!(config.session.browse_timeout_secs, 300);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [bot]
            name = "swapbot"
            default_language = "ru"

            [session]
            browse_timeout_secs = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.bot.name, "swapbot");
        assert_eq!(config.bot.default_language, "ru");
        assert_eq!(config.session.browse_timeout_secs, 120);
        // Untouched sections keep their defaults.
        assert_eq!(config.storage.database_path, "bookmatch.db");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
            [bot]
            nmae = "typo"
            "#,
        );
        assert!(result.is_err(), "deny_unknown_fields should reject typos");
    }
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the bookmatch bot.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::BookmatchConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid `BookmatchConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<BookmatchConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<BookmatchConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_and_validate_str_catches_semantic_errors() {
        let result = load_and_validate_str(
            r#"
            [bot]
            log_level = "loud"
            "#,
        );
        let errors = result.unwrap_err();
        assert!(errors[0].to_string().contains("log_level"));
    }

    #[test]
    fn load_and_validate_str_accepts_good_config() {
        let config = load_and_validate_str(
            r#"
            [storage]
            database_path = "/tmp/test.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.database_path, "/tmp/test.db");
    }
}

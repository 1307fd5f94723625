// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error rendering for configuration problems.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error suitable for terminal rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// TOML parsing or type errors surfaced by Figment.
    #[error("{message}")]
    #[diagnostic(code(bookmatch::config::parse))]
    Parse { message: String },

    /// Semantic validation failures (unknown log level, zero timeout, ...).
    #[error("{message}")]
    #[diagnostic(code(bookmatch::config::validation))]
    Validation { message: String },
}

/// Convert a Figment extraction error into diagnostic errors, one per
/// underlying problem.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::Parse {
            message: e.to_string(),
        })
        .collect()
}

/// Print all collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("error: {error}");
    }
    eprintln!(
        "{} configuration error(s); fix bookmatch.toml or BOOKMATCH_* env vars and retry",
        errors.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figment_errors_become_parse_diagnostics() {
        let err = crate::loader::load_config_from_str("bot = 3").unwrap_err();
        let errors = figment_to_config_errors(err);
        assert!(!errors.is_empty());
        assert!(matches!(errors[0], ConfigError::Parse { .. }));
    }
}

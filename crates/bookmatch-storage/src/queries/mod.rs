// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per collection.

pub mod decisions;
pub mod matches;
pub mod users;

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as the canonical stored timestamp format
/// (`2026-01-01T00:00:00.000Z`).
pub(crate) fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp back into a `DateTime<Utc>`.
pub(crate) fn parse_ts(value: &str, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                format!("invalid timestamp `{value}`: {e}").into(),
            )
        })
}

/// Parse a stored canonical enum value (snake_case text column).
pub(crate) fn parse_enum<T: FromStr>(value: &str, idx: usize) -> rusqlite::Result<T> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("invalid enum value `{value}`").into(),
        )
    })
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types shared across the bookmatch workspace.
//!
//! All branching logic operates on the canonical enums defined here, never
//! on localized strings. Mapping localized labels back to canonical values
//! is owned by the dialog layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Hard cap on the number of books a user may list at once.
pub const MAX_BOOKS: usize = 3;

/// External chat identifier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a listed book, assigned at insert time.
///
/// Deletion references books by this id rather than by list position, so a
/// stale menu cannot delete the wrong book after the list changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub i64);

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a user's books are visible to other users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// The opposite status, used by the toggle operation.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

/// Physical condition of a listed book.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookCondition {
    New,
    Good,
    Fair,
    Poor,
}

impl BookCondition {
    /// All conditions in canonical prompt order.
    pub const ALL: [BookCondition; 4] = [
        BookCondition::New,
        BookCondition::Good,
        BookCondition::Fair,
        BookCondition::Poor,
    ];
}

/// A persisted like or skip action from one user toward another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    Like,
    Skip,
}

/// Lifecycle of a confirmed match. `Completed` is reserved; nothing in the
/// core transitions to it yet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Active,
    Completed,
}

/// Supported interface languages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// A book listed by a user. Owned exclusively by its user; display order is
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub condition: Option<BookCondition>,
    pub added_at: DateTime<Utc>,
}

/// A book about to be inserted (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub condition: Option<BookCondition>,
}

/// A registered user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: String,
    pub status: UserStatus,
    pub language: Language,
    pub books: Vec<Book>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user can be offered as a browsing candidate:
    /// active and listing at least one book.
    pub fn is_eligible(&self) -> bool {
        self.status == UserStatus::Active && !self.books.is_empty()
    }
}

/// A user profile about to be created on first contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: String,
    pub language: Language,
}

/// A like/skip decision between a user pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub from_user: UserId,
    pub to_user: UserId,
    pub action: DecisionAction,
}

/// A confirmed mutual-like relationship between two users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub users: [UserId; 2],
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// The participant that is not `me`.
    pub fn other(&self, me: UserId) -> UserId {
        if self.users[0] == me {
            self.users[1]
        } else {
            self.users[0]
        }
    }
}

/// Result of an idempotent match creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A new match row was inserted.
    Created(i64),
    /// The pair was already matched; the existing id is returned.
    AlreadyExists(i64),
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded(String),
    Unhealthy(String),
}

/// Identity attached to an inbound chat event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: String,
}

/// A reply keyboard affordance: rows of already-localized button labels.
///
/// The transport renders this however its platform allows; an empty `rows`
/// with `remove` set asks the platform to drop any visible keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
    pub remove: bool,
}

impl Keyboard {
    pub fn rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            remove: false,
        }
    }

    pub fn removed() -> Self {
        Self {
            rows: Vec::new(),
            remove: true,
        }
    }
}

/// An outbound reply produced by the dialog layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_toggles_both_ways() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
    }

    #[test]
    fn canonical_enum_round_trips() {
        for condition in BookCondition::ALL {
            let parsed = BookCondition::from_str(&condition.to_string()).unwrap();
            assert_eq!(condition, parsed);
        }
        assert_eq!(DecisionAction::from_str("like").unwrap(), DecisionAction::Like);
        assert_eq!(DecisionAction::from_str("skip").unwrap(), DecisionAction::Skip);
        assert_eq!(Language::from_str("ru").unwrap(), Language::Ru);
    }

    #[test]
    fn condition_serializes_to_snake_case() {
        let json = serde_json::to_string(&BookCondition::New).unwrap();
        assert_eq!(json, "\"new\"");
    }

    #[test]
    fn match_other_returns_the_peer() {
        let m = Match {
            id: 1,
            users: [UserId(10), UserId(20)],
            status: MatchStatus::Active,
            created_at: Utc::now(),
        };
        assert_eq!(m.other(UserId(10)), UserId(20));
        assert_eq!(m.other(UserId(20)), UserId(10));
    }

    #[test]
    fn eligibility_requires_active_status_and_books() {
        let now = Utc::now();
        let mut user = User {
            id: UserId(1),
            username: None,
            first_name: "Ada".into(),
            status: UserStatus::Active,
            language: Language::En,
            books: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        assert!(!user.is_eligible(), "no books means not eligible");

        user.books.push(Book {
            id: BookId(1),
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            condition: Some(BookCondition::Good),
            added_at: now,
        });
        assert!(user.is_eligible());

        user.status = UserStatus::Inactive;
        assert!(!user.is_eligible(), "inactive users are never eligible");
    }
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence traits for user profiles, decisions, and matches.

use async_trait::async_trait;

use crate::error::BookmatchError;
use crate::types::{
    Book, BookId, Decision, DecisionAction, Language, Match, MatchOutcome, NewBook, NewUser, User,
    UserId, UserStatus,
};

/// Persistent user profiles and their book lists.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a profile on first contact. Fails if the id already exists.
    async fn create_user(&self, user: &NewUser) -> Result<(), BookmatchError>;

    /// Fetch a profile with its books in insertion order.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, BookmatchError>;

    async fn set_status(&self, id: UserId, status: UserStatus) -> Result<(), BookmatchError>;

    async fn set_language(&self, id: UserId, language: Language) -> Result<(), BookmatchError>;

    /// Append a book to the user's list, returning the stored row with its
    /// stable id.
    async fn add_book(&self, id: UserId, book: &NewBook) -> Result<Book, BookmatchError>;

    /// Delete a book by its stable id. Returns `false` if the book no longer
    /// exists (stale menu), which callers treat as a safe no-op.
    async fn delete_book(&self, id: UserId, book: BookId) -> Result<bool, BookmatchError>;

    /// Pick one user uniformly at random among active users with at least
    /// one book whose id is not in `exclude`.
    async fn pick_random_eligible(&self, exclude: &[UserId])
        -> Result<Option<User>, BookmatchError>;
}

/// Persistent like/skip records. Decisions are never mutated or deleted;
/// skips are permanent.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Insert-if-absent. Returns `true` when a new row was written, `false`
    /// when the identical decision already existed.
    async fn record(&self, decision: &Decision) -> Result<bool, BookmatchError>;

    async fn exists(
        &self,
        from: UserId,
        to: UserId,
        action: DecisionAction,
    ) -> Result<bool, BookmatchError>;

    /// All users the given user has already acted on (likes and skips).
    async fn decided_user_ids(&self, from: UserId) -> Result<Vec<UserId>, BookmatchError>;
}

/// Persistent confirmed matches. At most one row per unordered user pair.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Atomically create a match for the pair unless one already exists.
    ///
    /// The unordered-pair uniqueness constraint resolves the two-sided race:
    /// a conflicting concurrent insert yields `AlreadyExists`, never an error.
    async fn create_if_absent(&self, a: UserId, b: UserId)
        -> Result<MatchOutcome, BookmatchError>;

    /// Active matches involving the given user.
    async fn matches_for(&self, user: UserId) -> Result<Vec<Match>, BookmatchError>;
}

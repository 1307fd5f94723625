// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `bookmatch-core::types` for use across
//! trait boundaries. This module re-exports them for convenience within the
//! storage crate.

pub use bookmatch_core::types::{
    Book, BookCondition, BookId, Decision, DecisionAction, Language, Match, MatchOutcome,
    MatchStatus, NewBook, NewUser, User, UserId, UserStatus,
};

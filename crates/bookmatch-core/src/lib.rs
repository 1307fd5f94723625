// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the bookmatch matchmaking bot.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain model used throughout the bookmatch workspace. Storage backends,
//! chat transports, and the session cache all implement traits defined here.

pub mod error;
pub mod session;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::BookmatchError;
pub use session::{BrowseCursor, ConvState, DraftBook, PendingDelete, Session, TempData};
pub use types::{
    Book, BookCondition, BookId, Contact, Decision, DecisionAction, HealthStatus, Keyboard,
    Language, Match, MatchOutcome, MatchStatus, NewBook, NewUser, Reply, User, UserId, UserStatus,
    MAX_BOOKS,
};

// Re-export all collaborator traits at crate root.
pub use traits::{Adapter, ChatTransport, DecisionStore, MatchStore, SessionStore, UserStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_all_variants() {
        let _config = BookmatchError::Config("test".into());
        let _storage = BookmatchError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _transport = BookmatchError::Transport {
            message: "test".into(),
            source: None,
        };
        let _not_found = BookmatchError::UserNotFound(UserId(7));
        let _internal = BookmatchError::Internal("test".into());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = BookmatchError::UserNotFound(UserId(7));
        assert_eq!(err.to_string(), "user not found: 7");

        let err = BookmatchError::Transport {
            message: "channel closed".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "transport error: channel closed");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // If any trait module is missing or broken this test won't compile.
        fn _assert_user_store<T: UserStore>() {}
        fn _assert_decision_store<T: DecisionStore>() {}
        fn _assert_match_store<T: MatchStore>() {}
        fn _assert_session_store<T: SessionStore>() {}
        fn _assert_transport<T: ChatTransport>() {}
        fn _assert_adapter<T: Adapter>() {}
    }
}

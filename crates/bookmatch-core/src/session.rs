// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user conversation session state.
//!
//! Sessions are ephemeral and live in a volatile TTL cache. Losing a session
//! (eviction, restart) is equivalent to an implicit cancel: every load after
//! a miss yields a fresh idle session, never undefined state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{BookId, Language, UserId};

/// Conversation states driven by the controller.
///
/// `Idle` is both the initial state after onboarding and the universal
/// error/timeout recovery target.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConvState {
    #[default]
    Idle,
    InitialLanguageSelection,
    LanguageSelection,
    Registration,
    AddingBook,
    ProfileMenu,
    ManageBooks,
    ConfirmDeleteBook,
    Browsing,
}

/// A partially collected book inside a registration or add-book dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// A deletion awaiting confirmation, captured at menu-render time.
///
/// The stable `book_id` is re-validated against the then-current list before
/// any row is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingDelete {
    pub book_id: BookId,
    pub title: String,
}

/// Scratch data for the in-progress dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TempData {
    pub draft: Option<DraftBook>,
    pub pending_delete: Option<PendingDelete>,
}

impl TempData {
    pub fn is_empty(&self) -> bool {
        self.draft.is_none() && self.pending_delete.is_none()
    }
}

/// The candidate currently shown while browsing and when it was shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrowseCursor {
    pub candidate: UserId,
    pub started_at: DateTime<Utc>,
}

/// Ephemeral per-user conversation state, separate from the permanent profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub state: ConvState,
    pub step: u8,
    pub temp: TempData,
    pub browsing: Option<BrowseCursor>,
    /// Cached copy of the user's language preference.
    pub language: Option<Language>,
}

impl Session {
    /// Reset to idle, dropping all dialog scratch state.
    ///
    /// The cached language survives a reset; it is a preference, not
    /// dialog progress.
    pub fn reset(&mut self) {
        self.state = ConvState::Idle;
        self.step = 0;
        self.temp = TempData::default();
        self.browsing = None;
    }

    /// Enter a dialog state at a given step with clean scratch data.
    pub fn enter(&mut self, state: ConvState, step: u8) {
        self.state = state;
        self.step = step;
        self.temp = TempData::default();
        self.browsing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_idle() {
        let session = Session::default();
        assert_eq!(session.state, ConvState::Idle);
        assert_eq!(session.step, 0);
        assert!(session.temp.is_empty());
        assert!(session.browsing.is_none());
        assert!(session.language.is_none());
    }

    #[test]
    fn reset_clears_dialog_state_but_keeps_language() {
        let mut session = Session {
            state: ConvState::Registration,
            step: 3,
            temp: TempData {
                draft: Some(DraftBook {
                    title: Some("Dune".into()),
                    author: None,
                }),
                pending_delete: None,
            },
            browsing: Some(BrowseCursor {
                candidate: UserId(42),
                started_at: Utc::now(),
            }),
            language: Some(Language::Ru),
        };

        session.reset();

        assert_eq!(session.state, ConvState::Idle);
        assert_eq!(session.step, 0);
        assert!(session.temp.is_empty());
        assert!(session.browsing.is_none());
        assert_eq!(session.language, Some(Language::Ru));
    }

    #[test]
    fn conv_state_snake_case_round_trip() {
        use std::str::FromStr;
        assert_eq!(ConvState::ConfirmDeleteBook.to_string(), "confirm_delete_book");
        assert_eq!(
            ConvState::from_str("manage_books").unwrap(),
            ConvState::ManageBooks
        );
    }
}

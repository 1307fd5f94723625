// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input normalization: localized button labels and slash commands are
//! resolved once into canonical tags, so dispatch never branches on
//! localized strings.

use bookmatch_core::Language;
use bookmatch_i18n::{label, Label};

/// Canonical action tags for menu buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Browse,
    Profile,
    Help,
    LanguageMenu,
    ToggleStatus,
    ManageBooks,
    AddBook,
    BackToMain,
    BackToProfile,
    Cancel,
    CancelRegistration,
    Like,
    Skip,
    Yes,
    No,
    /// 1-based list position parsed from a "❌ Book N: Title" button.
    DeleteBook(usize),
    ConfirmDelete,
    RejectDelete,
}

/// Fixed global slash commands. These bypass any active dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Profile,
    Browse,
    Add,
    Matches,
    Status,
    Help,
    Language,
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "/start" => Some(Command::Start),
            "/profile" => Some(Command::Profile),
            "/browse" => Some(Command::Browse),
            "/add" => Some(Command::Add),
            "/matches" => Some(Command::Matches),
            "/status" => Some(Command::Status),
            "/help" => Some(Command::Help),
            "/language" => Some(Command::Language),
            _ => None,
        }
    }
}

/// Resolve a pressed button label to its canonical action.
///
/// The user's language is consulted first, falling back to English so a
/// stale keyboard from before a language switch still works.
pub fn resolve(text: &str, lang: Language) -> Option<Action> {
    resolve_in(text, lang).or_else(|| {
        if lang != Language::En {
            resolve_in(text, Language::En)
        } else {
            None
        }
    })
}

fn resolve_in(text: &str, lang: Language) -> Option<Action> {
    let exact = [
        (Label::MenuBrowse, Action::Browse),
        (Label::MenuProfile, Action::Profile),
        (Label::MenuHelp, Action::Help),
        (Label::MenuLanguage, Action::LanguageMenu),
        (Label::ProfileToggleStatus, Action::ToggleStatus),
        (Label::ProfileManageBooks, Action::ManageBooks),
        (Label::ProfileAddBook, Action::AddBook),
        (Label::BackToMain, Action::BackToMain),
        (Label::BackToProfile, Action::BackToProfile),
        (Label::Cancel, Action::Cancel),
        (Label::CancelRegistration, Action::CancelRegistration),
        (Label::BrowseLike, Action::Like),
        (Label::BrowseSkip, Action::Skip),
        (Label::Yes, Action::Yes),
        (Label::No, Action::No),
        (Label::DeleteReject, Action::RejectDelete),
    ];
    for (l, action) in exact {
        if text == label(l, lang) {
            return Some(action);
        }
    }

    if let Some(rest) = text.strip_prefix(label(Label::DeleteBookPrefix, lang)) {
        // "❌ Book 2: Title" -> position 2.
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(position) = digits.parse::<usize>() {
            return Some(Action::DeleteBook(position));
        }
        return None;
    }

    if text.starts_with(label(Label::DeleteConfirmPrefix, lang)) {
        return Some(Action::ConfirmDelete);
    }

    None
}

/// Whether the input is an affirmative answer to a yes/no prompt
/// (the localized Yes button, or a plain typed "yes").
pub fn is_yes(text: &str, lang: Language) -> bool {
    text == label(Label::Yes, lang) || text.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_exactly() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/matches"), Some(Command::Matches));
        assert_eq!(Command::parse("/startx"), None);
        assert_eq!(Command::parse("start"), None);
    }

    #[test]
    fn labels_resolve_in_both_languages() {
        assert_eq!(resolve("📚 Browse Books", Language::En), Some(Action::Browse));
        assert_eq!(resolve("📚 Искать книги", Language::Ru), Some(Action::Browse));
        assert_eq!(resolve("👍 Like", Language::En), Some(Action::Like));
        assert_eq!(resolve("👎 Пропустить", Language::Ru), Some(Action::Skip));
    }

    #[test]
    fn english_labels_work_as_fallback_for_other_languages() {
        // A stale English keyboard pressed by a Russian-language session.
        assert_eq!(resolve("📋 My Profile", Language::Ru), Some(Action::Profile));
    }

    #[test]
    fn delete_button_carries_its_position() {
        assert_eq!(
            resolve("❌ Book 2: Dune", Language::En),
            Some(Action::DeleteBook(2))
        );
        assert_eq!(
            resolve("❌ Книга 3: Солярис", Language::Ru),
            Some(Action::DeleteBook(3))
        );
        assert_eq!(resolve("❌ Book x: Dune", Language::En), None);
    }

    #[test]
    fn confirm_delete_matches_by_prefix() {
        assert_eq!(
            resolve("✅ Yes, delete Book 1", Language::En),
            Some(Action::ConfirmDelete)
        );
        assert_eq!(
            resolve("❌ No, keep it", Language::En),
            Some(Action::RejectDelete)
        );
    }

    #[test]
    fn free_text_resolves_to_nothing() {
        assert_eq!(resolve("The Master and Margarita", Language::En), None);
        assert_eq!(resolve("", Language::En), None);
    }

    #[test]
    fn yes_detection_accepts_button_and_plain_text() {
        assert!(is_yes("✅ Yes", Language::En));
        assert!(is_yes("✅ Да", Language::Ru));
        assert!(is_yes("YES", Language::En));
        assert!(!is_yes("nope", Language::En));
    }
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Localization catalogs for the bookmatch bot.
//!
//! All user-facing text lives here, keyed by typed message and label enums.
//! The dialog layer renders replies through this crate and maps pressed
//! button labels back to canonical actions; nothing else in the workspace
//! branches on localized strings.

pub mod labels;
pub mod messages;

pub use labels::{
    condition_label, label, language_name, status_emoji, status_word, Label, LANGUAGE_BACK,
    SUPPORTED_LANGUAGES,
};
pub use messages::Msg;

use bookmatch_core::{Book, Language};

/// Resolve a language keyboard selection (native language name) to its code.
pub fn language_by_name(name: &str) -> Option<Language> {
    SUPPORTED_LANGUAGES
        .into_iter()
        .find(|lang| language_name(*lang) == name)
}

/// A user's contact handle for match messages: `@username`, or a localized
/// "no username" phrase.
pub fn contact_handle(username: Option<&str>, lang: Language) -> String {
    match username {
        Some(username) => format!("@{username}"),
        None => Msg::ContactNoUsername.render(lang),
    }
}

/// One-line-per-book summary used in match notifications and listings.
pub fn format_books_brief(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| format!("- {} by {}", book.title, book.author))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_by_name_resolves_supported_names() {
        assert_eq!(language_by_name("English"), Some(Language::En));
        assert_eq!(language_by_name("Русский"), Some(Language::Ru));
        assert_eq!(language_by_name("Deutsch"), None);
    }

    #[test]
    fn contact_handle_prefers_username() {
        assert_eq!(contact_handle(Some("ada"), Language::En), "@ada");
        assert!(contact_handle(None, Language::En).contains("username"));
    }
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply keyboard builders.
//!
//! Each builder returns concrete localized button rows; the transport only
//! renders them. Layouts follow the bot's menu structure: two buttons per
//! row, navigation at the bottom.

use bookmatch_core::{Book, Keyboard, Language, MAX_BOOKS};
use bookmatch_i18n::{label, language_name, Label, LANGUAGE_BACK, SUPPORTED_LANGUAGES};

pub fn main_menu(lang: Language) -> Keyboard {
    Keyboard::rows(vec![
        vec![
            label(Label::MenuBrowse, lang).to_string(),
            label(Label::MenuProfile, lang).to_string(),
        ],
        vec![
            label(Label::MenuHelp, lang).to_string(),
            label(Label::MenuLanguage, lang).to_string(),
        ],
    ])
}

/// A single back/cancel button.
pub fn back(button: Label, lang: Language) -> Keyboard {
    Keyboard::rows(vec![vec![label(button, lang).to_string()]])
}

pub fn condition(lang: Language) -> Keyboard {
    use bookmatch_core::BookCondition::*;
    let cond = |c| bookmatch_i18n::condition_label(c, lang).to_string();
    Keyboard::rows(vec![
        vec![cond(New), cond(Good)],
        vec![cond(Fair), cond(Poor)],
        vec![label(Label::Cancel, lang).to_string()],
    ])
}

pub fn yes_no(lang: Language) -> Keyboard {
    Keyboard::rows(vec![vec![
        label(Label::Yes, lang).to_string(),
        label(Label::No, lang).to_string(),
    ]])
}

pub fn browse(lang: Language) -> Keyboard {
    Keyboard::rows(vec![
        vec![
            label(Label::BrowseSkip, lang).to_string(),
            label(Label::BrowseLike, lang).to_string(),
        ],
        vec![label(Label::BackToMain, lang).to_string()],
    ])
}

pub fn language() -> Keyboard {
    Keyboard::rows(vec![
        SUPPORTED_LANGUAGES
            .iter()
            .map(|lang| language_name(*lang).to_string())
            .collect(),
        vec![LANGUAGE_BACK.to_string()],
    ])
}

pub fn profile_menu(lang: Language, can_add: bool) -> Keyboard {
    let mut rows = vec![vec![
        label(Label::ProfileToggleStatus, lang).to_string(),
        label(Label::ProfileManageBooks, lang).to_string(),
    ]];
    if can_add {
        rows.push(vec![label(Label::ProfileAddBook, lang).to_string()]);
    }
    rows.push(vec![label(Label::BackToMain, lang).to_string()]);
    Keyboard::rows(rows)
}

/// One delete button per book ("❌ Book N: Title"), plus add/navigation.
pub fn manage_books(lang: Language, books: &[Book]) -> Keyboard {
    let mut rows: Vec<Vec<String>> = books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            vec![format!(
                "{}{}: {}",
                label(Label::DeleteBookPrefix, lang),
                i + 1,
                book.title
            )]
        })
        .collect();
    if books.len() < MAX_BOOKS {
        rows.push(vec![label(Label::ProfileAddBook, lang).to_string()]);
    }
    rows.push(vec![
        label(Label::BackToProfile, lang).to_string(),
        label(Label::BackToMain, lang).to_string(),
    ]);
    Keyboard::rows(rows)
}

pub fn confirm_delete(lang: Language) -> Keyboard {
    Keyboard::rows(vec![
        vec![
            label(Label::DeleteConfirmPrefix, lang).to_string(),
            label(Label::DeleteReject, lang).to_string(),
        ],
        vec![label(Label::BackToProfile, lang).to_string()],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmatch_core::{BookCondition, BookId};
    use chrono::Utc;

    fn book(title: &str) -> Book {
        Book {
            id: BookId(1),
            title: title.to_string(),
            author: "A".into(),
            condition: Some(BookCondition::Good),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn main_menu_has_four_buttons() {
        let kb = main_menu(Language::En);
        let count: usize = kb.rows.iter().map(Vec::len).sum();
        assert_eq!(count, 4);
        assert!(!kb.remove);
    }

    #[test]
    fn manage_books_offers_add_only_under_the_cap() {
        let one = vec![book("A")];
        let kb = manage_books(Language::En, &one);
        assert!(kb.rows.iter().flatten().any(|b| b == "📕 Add Book"));
        assert!(kb.rows.iter().flatten().any(|b| b == "❌ Book 1: A"));

        let three = vec![book("A"), book("B"), book("C")];
        let kb = manage_books(Language::En, &three);
        assert!(!kb.rows.iter().flatten().any(|b| b == "📕 Add Book"));
    }

    #[test]
    fn delete_buttons_round_trip_through_action_resolution() {
        use crate::actions::{resolve, Action};
        let books = vec![book("Dune"), book("Solaris")];
        let kb = manage_books(Language::Ru, &books);
        let second = kb
            .rows
            .iter()
            .flatten()
            .find(|b| b.contains("Солярис") || b.contains("Solaris"))
            .unwrap();
        assert_eq!(resolve(second, Language::Ru), Some(Action::DeleteBook(2)));
    }
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Button labels shown on reply keyboards.
//!
//! Dispatch never branches on these strings directly; the dialog layer maps
//! a pressed label back to a canonical action tag first.

use bookmatch_core::{BookCondition, Language, UserStatus};

/// Canonical identifiers for every localized button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    MenuBrowse,
    MenuProfile,
    MenuHelp,
    MenuLanguage,
    ProfileToggleStatus,
    ProfileManageBooks,
    ProfileAddBook,
    BackToMain,
    BackToProfile,
    Cancel,
    CancelRegistration,
    BrowseLike,
    BrowseSkip,
    Yes,
    No,
    /// Prefix of the per-book delete buttons ("❌ Book 2: Title").
    DeleteBookPrefix,
    /// Prefix of the deletion confirmation button.
    DeleteConfirmPrefix,
    DeleteReject,
}

/// Look up a button label in the given language.
pub fn label(label: Label, lang: Language) -> &'static str {
    match lang {
        Language::En => match label {
            Label::MenuBrowse => "📚 Browse Books",
            Label::MenuProfile => "📋 My Profile",
            Label::MenuHelp => "ℹ️ Help",
            Label::MenuLanguage => "🌐 Language",
            Label::ProfileToggleStatus => "🔄 Toggle Status",
            Label::ProfileManageBooks => "📚 Manage Books",
            Label::ProfileAddBook => "📕 Add Book",
            Label::BackToMain => "🔙 Back to Main Menu",
            Label::BackToProfile => "🔙 Back to Profile",
            Label::Cancel => "🔙 Cancel",
            Label::CancelRegistration => "🔙 Cancel Registration",
            Label::BrowseLike => "👍 Like",
            Label::BrowseSkip => "👎 Skip",
            Label::Yes => "✅ Yes",
            Label::No => "❌ No",
            Label::DeleteBookPrefix => "❌ Book ",
            Label::DeleteConfirmPrefix => "✅ Yes, delete",
            Label::DeleteReject => "❌ No, keep it",
        },
        Language::Ru => match label {
            Label::MenuBrowse => "📚 Искать книги",
            Label::MenuProfile => "📋 Мой профиль",
            Label::MenuHelp => "ℹ️ Помощь",
            Label::MenuLanguage => "🌐 Язык",
            Label::ProfileToggleStatus => "🔄 Изменить статус",
            Label::ProfileManageBooks => "📚 Управление книгами",
            Label::ProfileAddBook => "📕 Добавить книгу",
            Label::BackToMain => "🔙 Вернуться в меню",
            Label::BackToProfile => "🔙 Вернуться в профиль",
            Label::Cancel => "🔙 Отмена",
            Label::CancelRegistration => "🔙 Отменить регистрацию",
            Label::BrowseLike => "👍 Нравится",
            Label::BrowseSkip => "👎 Пропустить",
            Label::Yes => "✅ Да",
            Label::No => "❌ Нет",
            Label::DeleteBookPrefix => "❌ Книга ",
            Label::DeleteConfirmPrefix => "✅ Да, удалить",
            Label::DeleteReject => "❌ Нет, оставить",
        },
    }
}

/// Localized book-condition button label, emoji included.
pub fn condition_label(condition: BookCondition, lang: Language) -> &'static str {
    match lang {
        Language::En => match condition {
            BookCondition::New => "📘 New",
            BookCondition::Good => "👍 Good",
            BookCondition::Fair => "👌 Fair",
            BookCondition::Poor => "😕 Poor",
        },
        Language::Ru => match condition {
            BookCondition::New => "📘 Новая",
            BookCondition::Good => "👍 Хорошая",
            BookCondition::Fair => "👌 Средняя",
            BookCondition::Poor => "😕 Плохая",
        },
    }
}

/// Localized word for a user status (no emoji).
pub fn status_word(status: UserStatus, lang: Language) -> &'static str {
    match (lang, status) {
        (Language::En, UserStatus::Active) => "active",
        (Language::En, UserStatus::Inactive) => "inactive",
        (Language::Ru, UserStatus::Active) => "активен",
        (Language::Ru, UserStatus::Inactive) => "неактивен",
    }
}

/// Status indicator emoji.
pub fn status_emoji(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "🟢",
        UserStatus::Inactive => "🔴",
    }
}

/// Native display name of a supported language, used on the language keyboard.
pub fn language_name(lang: Language) -> &'static str {
    match lang {
        Language::En => "English",
        Language::Ru => "Русский",
    }
}

/// All supported languages in keyboard order.
pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::En, Language::Ru];

/// The bilingual back button shown on the language keyboard.
pub const LANGUAGE_BACK: &str = "🔙 Back / Назад";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_every_label() {
        // Exhaustive match arms guarantee coverage at compile time; spot-check
        // that labels differ between languages where translations exist.
        assert_ne!(
            label(Label::MenuBrowse, Language::En),
            label(Label::MenuBrowse, Language::Ru)
        );
        assert_ne!(
            condition_label(BookCondition::New, Language::En),
            condition_label(BookCondition::New, Language::Ru)
        );
    }

    #[test]
    fn language_names_resolve_codes() {
        for lang in SUPPORTED_LANGUAGES {
            assert!(!language_name(lang).is_empty());
        }
        assert_eq!(language_name(Language::Ru), "Русский");
    }
}

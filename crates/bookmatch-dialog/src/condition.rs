// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Condition input normalization.
//!
//! This is the one place where localized text crosses back into canonical
//! enum values: users answer the condition prompt with a localized button
//! label (or free text), and the dialog must map it onto [`BookCondition`].

use bookmatch_core::{BookCondition, Language};
use bookmatch_i18n::condition_label;

/// Map raw condition input to a canonical value.
///
/// Algorithm: lower-case the input, then test containment (not equality)
/// against each localized condition label in turn (new, good, fair, poor;
/// first match wins). If no label matches, the lower-cased input itself is
/// tried as a canonical value. `None` means the caller re-prompts without
/// advancing the step.
pub fn normalize_condition(input: &str, lang: Language) -> Option<BookCondition> {
    let lowered = input.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    for condition in BookCondition::ALL {
        if condition_label(condition, lang)
            .to_lowercase()
            .contains(&lowered)
        {
            return Some(condition);
        }
    }
    lowered.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_labels_normalize_exactly() {
        assert_eq!(
            normalize_condition("📘 New", Language::En),
            Some(BookCondition::New)
        );
        assert_eq!(
            normalize_condition("😕 Плохая", Language::Ru),
            Some(BookCondition::Poor)
        );
    }

    #[test]
    fn bare_words_contain_match_against_labels() {
        assert_eq!(
            normalize_condition("good", Language::En),
            Some(BookCondition::Good)
        );
        assert_eq!(
            normalize_condition("FAIR", Language::En),
            Some(BookCondition::Fair)
        );
        assert_eq!(
            normalize_condition("новая", Language::Ru),
            Some(BookCondition::New)
        );
    }

    #[test]
    fn canonical_values_work_in_any_language() {
        // A Russian-language session typing the canonical English value falls
        // through label matching to the enum parse.
        assert_eq!(
            normalize_condition("poor", Language::Ru),
            Some(BookCondition::Poor)
        );
    }

    #[test]
    fn garbage_is_rejected_for_reprompt() {
        assert_eq!(normalize_condition("pristine", Language::En), None);
        assert_eq!(normalize_condition("", Language::En), None);
        assert_eq!(normalize_condition("   ", Language::En), None);
    }

    #[test]
    fn first_match_wins_in_canonical_order() {
        // "о" is contained in several Russian labels ("новая", "хорошая",
        // "плохая"); the scan order makes the earliest one win.
        let got = normalize_condition("о", Language::Ru).unwrap();
        assert_eq!(got, BookCondition::New);
    }
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matching engine for the bookmatch bot: candidate selection and
//! mutual-match detection over the store traits from `bookmatch-core`.

pub mod matcher;
pub mod selector;

pub use matcher::{DecisionOutcome, MatchEngine};
pub use selector::CandidateSelector;

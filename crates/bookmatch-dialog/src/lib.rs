// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation layer for the bookmatch bot.
//!
//! The [`Controller`] drives per-user dialogs over the collaborator traits
//! from `bookmatch-core`: registration, add-book, profile management,
//! language selection, and browsing with like/skip matching.

pub mod actions;
pub mod condition;
pub mod controller;
pub mod flows;
pub mod keyboards;

pub use actions::{Action, Command};
pub use condition::normalize_condition;
pub use controller::Controller;

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dialog flow handlers, one module per flow.

pub mod books;
pub mod browse;
pub mod matches;
pub mod onboarding;
pub mod profile;
pub mod registration;

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits consumed by the conversation core.

pub mod adapter;
pub mod session;
pub mod store;
pub mod transport;

pub use adapter::Adapter;
pub use session::SessionStore;
pub use store::{DecisionStore, MatchStore, UserStore};
pub use transport::ChatTransport;

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session cache trait.

use crate::session::Session;
use crate::types::UserId;

/// Volatile per-user session storage with TTL semantics.
///
/// Consistency contract: `load` never fails and never returns partial state.
/// A missing or expired entry yields a fresh default (idle) session, which
/// makes cache eviction equivalent to an implicit dialog cancel.
pub trait SessionStore: Send + Sync {
    fn load(&self, user: UserId) -> Session;

    fn store(&self, user: UserId, session: Session);

    fn clear(&self, user: UserId);
}

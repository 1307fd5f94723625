// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process TTL session cache.
//!
//! Sessions are volatile: an evicted or expired entry simply falls back to
//! the default idle session on the next load, which the controller treats as
//! an implicit dialog cancel. Nothing here is persisted.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

use bookmatch_core::{Session, SessionStore, UserId};

struct Entry {
    session: Session,
    expires_at: Instant,
}

/// A concurrent in-memory session store with per-entry TTL.
///
/// Every `store` refreshes the TTL, so an active dialog stays alive as long
/// as the user keeps interacting.
pub struct MemorySessions {
    ttl: Duration,
    entries: DashMap<UserId, Entry>,
}

impl MemorySessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    /// Number of live (possibly expired, not yet collected) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all expired entries. Expiry is also enforced lazily on `load`,
    /// so calling this is an optional memory-pressure measure.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!(purged, "purged expired sessions");
        }
    }
}

impl SessionStore for MemorySessions {
    fn load(&self, user: UserId) -> Session {
        let expired = match self.entries.get(&user) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return entry.session.clone();
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            // The read guard is dropped; safe to remove.
            self.entries.remove(&user);
            debug!(user_id = %user, "session expired, starting fresh");
        }
        Session::default()
    }

    fn store(&self, user: UserId, session: Session) {
        self.entries.insert(
            user,
            Entry {
                session,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    fn clear(&self, user: UserId) {
        self.entries.remove(&user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmatch_core::ConvState;

    fn registration_session() -> Session {
        let mut session = Session::default();
        session.enter(ConvState::Registration, 1);
        session
    }

    #[test]
    fn load_miss_yields_default_idle_session() {
        let sessions = MemorySessions::new(Duration::from_secs(60));
        let session = sessions.load(UserId(1));
        assert_eq!(session.state, ConvState::Idle);
        assert_eq!(session.step, 0);
    }

    #[test]
    fn store_then_load_round_trips() {
        let sessions = MemorySessions::new(Duration::from_secs(60));
        sessions.store(UserId(1), registration_session());

        let loaded = sessions.load(UserId(1));
        assert_eq!(loaded.state, ConvState::Registration);
        assert_eq!(loaded.step, 1);
    }

    #[test]
    fn expired_entry_is_an_implicit_cancel() {
        let sessions = MemorySessions::new(Duration::from_millis(10));
        sessions.store(UserId(1), registration_session());

        std::thread::sleep(Duration::from_millis(25));

        let loaded = sessions.load(UserId(1));
        assert_eq!(loaded.state, ConvState::Idle, "expired session loads idle");
        assert!(sessions.is_empty(), "expired entry is collected on load");
    }

    #[test]
    fn clear_removes_the_entry() {
        let sessions = MemorySessions::new(Duration::from_secs(60));
        sessions.store(UserId(1), registration_session());
        sessions.clear(UserId(1));
        assert_eq!(sessions.load(UserId(1)).state, ConvState::Idle);
    }

    #[test]
    fn purge_expired_only_drops_stale_entries() {
        let sessions = MemorySessions::new(Duration::from_millis(10));
        sessions.store(UserId(1), registration_session());
        std::thread::sleep(Duration::from_millis(25));
        sessions.store(UserId(2), registration_session());

        sessions.purge_expired();
        assert_eq!(sessions.len(), 1, "only the stale entry is purged");
    }

    #[test]
    fn sessions_are_per_user() {
        let sessions = MemorySessions::new(Duration::from_secs(60));
        sessions.store(UserId(1), registration_session());

        assert_eq!(sessions.load(UserId(2)).state, ConvState::Idle);
        assert_eq!(sessions.load(UserId(1)).state, ConvState::Registration);
    }
}

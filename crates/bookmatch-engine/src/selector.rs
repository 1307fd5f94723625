// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate selection for browsing.

use std::sync::Arc;

use tracing::debug;

use bookmatch_core::{BookmatchError, DecisionStore, User, UserId, UserStore};

/// Picks one unseen, eligible candidate for a browsing user.
///
/// Eligible means: active status, at least one book, not the requester, and
/// not previously liked or skipped by the requester. Skips are permanent —
/// there is no history-clearing fallback, so an exhausted pool stays
/// exhausted until new users appear.
pub struct CandidateSelector {
    users: Arc<dyn UserStore>,
    decisions: Arc<dyn DecisionStore>,
}

impl CandidateSelector {
    pub fn new(users: Arc<dyn UserStore>, decisions: Arc<dyn DecisionStore>) -> Self {
        Self { users, decisions }
    }

    /// Select one candidate uniformly at random among the eligible set, or
    /// `None` when the pool is exhausted.
    pub async fn select(&self, user: UserId) -> Result<Option<User>, BookmatchError> {
        let mut exclude = self.decisions.decided_user_ids(user).await?;
        exclude.push(user);

        let candidate = self.users.pick_random_eligible(&exclude).await?;
        debug!(
            user_id = %user,
            excluded = exclude.len(),
            found = candidate.is_some(),
            "candidate selection"
        );
        Ok(candidate)
    }
}

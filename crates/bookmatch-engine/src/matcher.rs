// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mutual-match detection.
//!
//! `record_decision` is the single entry point for like/skip actions. It is
//! idempotent end to end: duplicate decisions insert nothing, and the match
//! row is guarded by the unordered-pair uniqueness constraint, so repeated
//! or concurrent likes can never produce a second match.

use std::sync::Arc;

use tracing::{debug, info, warn};

use bookmatch_core::{
    BookmatchError, ChatTransport, Decision, DecisionAction, DecisionStore, MatchOutcome,
    MatchStore, UserId, UserStore,
};
use bookmatch_i18n::{contact_handle, format_books_brief, Msg};

/// Result of recording a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// No reciprocal like exists (or the action was a skip).
    NoMatch,
    /// A mutual like exists. `newly_created` is true for exactly one of the
    /// two triggering sides; only that side notifies.
    Matched { match_id: i64, newly_created: bool },
}

/// Records decisions and detects mutual likes.
pub struct MatchEngine {
    users: Arc<dyn UserStore>,
    decisions: Arc<dyn DecisionStore>,
    matches: Arc<dyn MatchStore>,
    transport: Arc<dyn ChatTransport>,
}

impl MatchEngine {
    pub fn new(
        users: Arc<dyn UserStore>,
        decisions: Arc<dyn DecisionStore>,
        matches: Arc<dyn MatchStore>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            users,
            decisions,
            matches,
            transport,
        }
    }

    /// Record a like/skip decision and, on a mutual like, create the match
    /// exactly once.
    ///
    /// The non-initiating party is notified from a spawned task; the caller
    /// notifies the acting user in its own reply path. A failed decision or
    /// match write propagates as an error (nothing ambiguous is left behind:
    /// either the write landed and a retry is idempotent, or it didn't
    /// happen). A failed notification only degrades delivery.
    pub async fn record_decision(
        &self,
        from: UserId,
        to: UserId,
        action: DecisionAction,
    ) -> Result<DecisionOutcome, BookmatchError> {
        let decision = Decision {
            from_user: from,
            to_user: to,
            action,
        };
        let inserted = self.decisions.record(&decision).await?;
        if !inserted {
            debug!(from = %from, to = %to, %action, "duplicate decision ignored");
        }

        // Skips are terminal and never participate in match detection.
        if action != DecisionAction::Like {
            return Ok(DecisionOutcome::NoMatch);
        }

        if !self.decisions.exists(to, from, DecisionAction::Like).await? {
            return Ok(DecisionOutcome::NoMatch);
        }

        match self.matches.create_if_absent(from, to).await? {
            MatchOutcome::Created(match_id) => {
                info!(match_id, a = %from, b = %to, "mutual like, match created");
                self.spawn_notify_other(from, to);
                Ok(DecisionOutcome::Matched {
                    match_id,
                    newly_created: true,
                })
            }
            MatchOutcome::AlreadyExists(match_id) => {
                debug!(match_id, a = %from, b = %to, "pair already matched");
                Ok(DecisionOutcome::Matched {
                    match_id,
                    newly_created: false,
                })
            }
        }
    }

    /// Notify the non-initiating party about the new match, fire-and-forget.
    fn spawn_notify_other(&self, liker: UserId, other: UserId) {
        let users = self.users.clone();
        let transport = self.transport.clone();
        tokio::spawn(async move {
            if let Err(e) = notify_other(users, transport, liker, other).await {
                warn!(error = %e, user_id = %other, "match notification failed");
            }
        });
    }
}

async fn notify_other(
    users: Arc<dyn UserStore>,
    transport: Arc<dyn ChatTransport>,
    liker: UserId,
    other: UserId,
) -> Result<(), BookmatchError> {
    let Some(liker_profile) = users.get_user(liker).await? else {
        warn!(user_id = %liker, "liker profile missing, skipping notification");
        return Ok(());
    };
    let Some(other_profile) = users.get_user(other).await? else {
        warn!(user_id = %other, "matched profile missing, skipping notification");
        return Ok(());
    };

    let lang = other_profile.language;
    let books = format_books_brief(&liker_profile.books);
    let contact = contact_handle(liker_profile.username.as_deref(), lang);
    let text = Msg::MatchNotificationOther {
        name: &liker_profile.first_name,
        books: &books,
        contact: &contact,
    }
    .render(lang);

    let delivered = transport.send_direct(other, &text).await?;
    if !delivered {
        warn!(user_id = %other, "match notification not delivered");
    }
    Ok(())
}

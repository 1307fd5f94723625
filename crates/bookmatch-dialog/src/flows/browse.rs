// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browsing: show one candidate at a time, record like/skip, surface matches.
//!
//! Acting on a candidate is two-phase: acknowledge the decision first, then
//! continue with the next candidate. The ordering is logical sequencing in
//! one reply path, not a timer. The shown-candidate pointer expires after
//! the configured browse timeout; an action arriving later resets the
//! session instead of acting on stale data.

use bookmatch_core::{
    BookmatchError, BrowseCursor, Contact, ConvState, DecisionAction, Language, Reply, Session,
    User, UserId,
};
use bookmatch_engine::DecisionOutcome;
use bookmatch_i18n::{condition_label, contact_handle, format_books_brief, Msg};
use chrono::Utc;
use tracing::{info, warn};

use crate::controller::Controller;
use crate::keyboards;

/// Entry point (`/browse` or the menu button).
pub async fn start(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let Some(user) = ctrl.users.get_user(contact.id).await? else {
        let lang = ctrl.lang(session);
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(
                    Msg::ErrorNotRegistered.render(lang),
                    keyboards::main_menu(lang),
                ),
            )
            .await;
    };
    session.language = Some(user.language);
    let lang = user.language;

    if user.books.is_empty() {
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(
                    Msg::BrowseNoBooks.render(lang),
                    keyboards::main_menu(lang),
                ),
            )
            .await;
    }

    next_candidate(ctrl, contact, session).await
}

/// Handle a like/skip on the currently shown candidate.
pub async fn act(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
    action: DecisionAction,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);

    let Some(cursor) = session.browsing else {
        return expire(ctrl, contact, session).await;
    };
    if Utc::now().signed_duration_since(cursor.started_at) > ctrl.browse_timeout {
        warn!(user_id = %contact.id, "browsing candidate expired");
        return expire(ctrl, contact, session).await;
    }

    // Capture the candidate and clear the pointer before the first await so
    // a duplicate trigger cannot act on the same candidate twice.
    let candidate = cursor.candidate;
    session.browsing = None;

    let outcome = ctrl.engine.record_decision(contact.id, candidate, action).await?;

    let ack = match action {
        DecisionAction::Like => Msg::BrowseLiked,
        DecisionAction::Skip => Msg::BrowseSkipped,
    };
    ctrl.send(contact.id, Reply::text(ack.render(lang))).await?;

    if let DecisionOutcome::Matched {
        newly_created: true,
        match_id,
    } = outcome
    {
        info!(user_id = %contact.id, match_id, "notifying initiator about match");
        notify_initiator(ctrl, contact, candidate, lang).await?;
    }

    next_candidate(ctrl, contact, session).await
}

/// Back-to-main while browsing.
pub async fn cancel(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    session.reset();
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::BrowseCancelled.render(lang),
            keyboards::main_menu(lang),
        ),
    )
    .await
}

async fn expire(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    session.reset();
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::BrowseSessionExpired.render(lang),
            keyboards::main_menu(lang),
        ),
    )
    .await
}

/// Select and show the next candidate, or report exhaustion and go idle.
async fn next_candidate(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    match ctrl.selector.select(contact.id).await? {
        None => {
            session.reset();
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::BrowseNoMore.render(lang),
                    keyboards::main_menu(lang),
                ),
            )
            .await
        }
        Some(candidate) => {
            let text = render_candidate(&candidate, lang);
            session.state = ConvState::Browsing;
            session.step = 0;
            session.browsing = Some(BrowseCursor {
                candidate: candidate.id,
                started_at: Utc::now(),
            });
            ctrl.send(
                contact.id,
                Reply::with_keyboard(text, keyboards::browse(lang)),
            )
            .await
        }
    }
}

/// All of the candidate's books, anonymized header plus the question.
fn render_candidate(candidate: &User, lang: Language) -> String {
    let mut text = Msg::BrowseUserHeader {
        name: &candidate.first_name,
    }
    .render(lang);
    text.push_str("\n\n");
    let items: Vec<String> = candidate
        .books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let condition = book
                .condition
                .map(|c| condition_label(c, lang))
                .unwrap_or("-");
            Msg::BookItem {
                index: i + 1,
                title: &book.title,
                author: &book.author,
                condition,
            }
            .render(lang)
        })
        .collect();
    text.push_str(&items.join("\n\n"));
    text.push_str("\n\n");
    text.push_str(&Msg::BrowseQuestion.render(lang));
    text
}

/// Tell the acting user about the fresh match, in their own language,
/// synchronously in the reply path. The other party is notified by the
/// match engine's spawned task.
async fn notify_initiator(
    ctrl: &Controller,
    contact: &Contact,
    other: UserId,
    lang: Language,
) -> Result<(), BookmatchError> {
    let Some(other_profile) = ctrl.users.get_user(other).await? else {
        warn!(user_id = %other, "matched profile missing, skipping initiator notice");
        return Ok(());
    };
    let books = format_books_brief(&other_profile.books);
    let contact_line = contact_handle(other_profile.username.as_deref(), lang);
    let text = Msg::MatchNotification {
        name: &other_profile.first_name,
        books: &books,
        contact: &contact_line,
    }
    .render(lang);
    ctrl.send(contact.id, Reply::text(text)).await
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/matches`: list the user's active matches with contact details.

use bookmatch_core::{BookmatchError, Contact, Reply, Session};
use bookmatch_i18n::{contact_handle, format_books_brief, Msg};

use crate::controller::Controller;

pub async fn list(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);

    let matches = ctrl.matches.matches_for(contact.id).await?;
    if matches.is_empty() {
        return ctrl
            .send(contact.id, Reply::text(Msg::MatchesEmpty.render(lang)))
            .await;
    }

    let mut sections = vec![Msg::MatchesHeader.render(lang)];
    let mut index = 0;
    for m in &matches {
        // A vanished peer profile hides that entry rather than failing the list.
        let Some(other) = ctrl.users.get_user(m.other(contact.id)).await? else {
            continue;
        };
        index += 1;
        let books = format_books_brief(&other.books);
        let handle = contact_handle(other.username.as_deref(), lang);
        sections.push(
            Msg::MatchItem {
                index,
                name: &other.first_name,
                books: &books,
                contact: &handle,
            }
            .render(lang),
        );
    }
    sections.push(Msg::MatchesFooter.render(lang));

    ctrl.send(contact.id, Reply::text(sections.join("\n\n"))).await
}

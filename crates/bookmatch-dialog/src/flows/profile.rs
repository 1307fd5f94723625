// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Profile management: view profile, toggle status, manage and delete books.
//!
//! Menu-driven across `profile_menu` -> `manage_books` -> `confirm_delete_book`.
//! Deletion buttons carry a 1-based list position, but the confirmation step
//! pins the book's stable id at render time and re-validates it before the
//! row is removed, so a stale menu can never delete the wrong book.

use bookmatch_core::{
    BookmatchError, Contact, ConvState, Language, PendingDelete, Reply, Session, User, MAX_BOOKS,
};
use bookmatch_i18n::{condition_label, Msg};
use tracing::{debug, warn};

use crate::actions::Action;
use crate::controller::Controller;
use crate::keyboards;

pub fn in_profile_states(state: ConvState) -> bool {
    matches!(
        state,
        ConvState::ProfileMenu | ConvState::ManageBooks | ConvState::ConfirmDeleteBook
    )
}

/// Which actions this module claims for each profile state. Anything else
/// falls through to the global menu handling.
pub fn handles(state: ConvState, action: Action) -> bool {
    match state {
        ConvState::ProfileMenu => matches!(
            action,
            Action::ToggleStatus | Action::ManageBooks | Action::AddBook | Action::BackToMain
        ),
        ConvState::ManageBooks => matches!(
            action,
            Action::BackToProfile
                | Action::AddBook
                | Action::DeleteBook(_)
                | Action::BackToMain
        ),
        ConvState::ConfirmDeleteBook => matches!(
            action,
            Action::ConfirmDelete
                | Action::RejectDelete
                | Action::BackToProfile
                | Action::BackToMain
        ),
        _ => false,
    }
}

pub async fn handle_action(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
    action: Action,
) -> Result<(), BookmatchError> {
    debug!(user_id = %contact.id, state = %session.state, ?action, "profile action");

    if action == Action::BackToMain {
        let lang = ctrl.lang(session);
        session.reset();
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(Msg::MainMenu.render(lang), keyboards::main_menu(lang)),
            )
            .await;
    }

    match (session.state, action) {
        (ConvState::ProfileMenu, Action::ToggleStatus) => {
            toggle_status(ctrl, contact, session).await
        }
        (ConvState::ProfileMenu, Action::ManageBooks) => {
            show_manage_books(ctrl, contact, session).await
        }
        (ConvState::ProfileMenu | ConvState::ManageBooks, Action::AddBook) => {
            super::books::start(ctrl, contact, session).await
        }
        (ConvState::ManageBooks, Action::BackToProfile) => {
            show_profile(ctrl, contact, session).await
        }
        (ConvState::ManageBooks, Action::DeleteBook(position)) => {
            initiate_deletion(ctrl, contact, session, position).await
        }
        (ConvState::ConfirmDeleteBook, Action::ConfirmDelete) => {
            delete_confirmed(ctrl, contact, session).await
        }
        (ConvState::ConfirmDeleteBook, Action::RejectDelete | Action::BackToProfile) => {
            show_manage_books(ctrl, contact, session).await
        }
        _ => Ok(()),
    }
}

/// Render the profile and enter `profile_menu`.
pub async fn show_profile(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let Some(user) = require_user(ctrl, contact, session).await? else {
        return Ok(());
    };
    let lang = user.language;
    session.language = Some(lang);

    let mut text = Msg::ProfileDetails {
        name: &user.first_name,
        status: user.status,
    }
    .render(lang);
    text.push_str("\n\n");
    text.push_str(&book_list_section(&user, lang));
    text.push_str("\n\n");
    text.push_str(&Msg::SelectOption.render(lang));

    session.enter(ConvState::ProfileMenu, 0);
    ctrl.send(
        contact.id,
        Reply::with_keyboard(text, keyboards::profile_menu(lang, user.books.len() < MAX_BOOKS)),
    )
    .await
}

/// `/status`: toggle visibility without entering the profile menu.
pub async fn toggle_status_command(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let Some(user) = require_user(ctrl, contact, session).await? else {
        return Ok(());
    };
    let lang = user.language;
    session.language = Some(lang);

    let status = user.status.toggled();
    ctrl.users.set_status(contact.id, status).await?;
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::StatusUpdated { status }.render(lang),
            keyboards::main_menu(lang),
        ),
    )
    .await
}

async fn toggle_status(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let Some(user) = require_user(ctrl, contact, session).await? else {
        return Ok(());
    };
    let lang = ctrl.lang(session);

    let status = user.status.toggled();
    ctrl.users.set_status(contact.id, status).await?;
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::StatusUpdated { status }.render(lang),
            keyboards::profile_menu(lang, user.books.len() < MAX_BOOKS),
        ),
    )
    .await
}

/// Render the book-management view and enter `manage_books`.
pub async fn show_manage_books(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let Some(user) = require_user(ctrl, contact, session).await? else {
        return Ok(());
    };
    let lang = ctrl.lang(session);

    let mut text = Msg::BookManagementHeader.render(lang);
    text.push_str("\n\n");
    if user.books.is_empty() {
        text.push_str(&Msg::ManageNoBooks.render(lang));
    } else {
        text.push_str(&book_list_section(&user, lang));
        text.push_str("\n\n");
        text.push_str(&Msg::BookSelectRemove.render(lang));
    }

    session.enter(ConvState::ManageBooks, 0);
    ctrl.send(
        contact.id,
        Reply::with_keyboard(text, keyboards::manage_books(lang, &user.books)),
    )
    .await
}

/// Capture the targeted book's stable id and ask for confirmation.
async fn initiate_deletion(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
    position: usize,
) -> Result<(), BookmatchError> {
    let Some(user) = require_user(ctrl, contact, session).await? else {
        return Ok(());
    };
    let lang = ctrl.lang(session);

    // 1-based button position against the current list.
    let Some(book) = position.checked_sub(1).and_then(|i| user.books.get(i)) else {
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(
                    Msg::ErrorBookNotFound.render(lang),
                    keyboards::manage_books(lang, &user.books),
                ),
            )
            .await;
    };

    session.state = ConvState::ConfirmDeleteBook;
    session.temp.pending_delete = Some(PendingDelete {
        book_id: book.id,
        title: book.title.clone(),
    });

    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::DeleteConfirm {
                title: &book.title,
                author: &book.author,
            }
            .render(lang),
            keyboards::confirm_delete(lang),
        ),
    )
    .await
}

/// Re-validate the pinned book id and delete exactly that book.
async fn delete_confirmed(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    let Some(pending) = session.temp.pending_delete.take() else {
        return show_manage_books(ctrl, contact, session).await;
    };

    let deleted = ctrl.users.delete_book(contact.id, pending.book_id).await?;
    if deleted {
        ctrl.send(
            contact.id,
            Reply::text(Msg::BookDeleted { title: &pending.title }.render(lang)),
        )
        .await?;
    } else {
        // The list changed between render and confirm; safe no-op.
        warn!(user_id = %contact.id, book_id = %pending.book_id, "stale deletion target");
        ctrl.send(
            contact.id,
            Reply::text(Msg::ErrorBookNotFound.render(lang)),
        )
        .await?;
    }

    show_manage_books(ctrl, contact, session).await
}

/// Fetch the user or reset to idle with the "user not found" reply.
async fn require_user(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<Option<User>, BookmatchError> {
    match ctrl.users.get_user(contact.id).await? {
        Some(user) => Ok(Some(user)),
        None => {
            warn!(user_id = %contact.id, "user record missing in profile flow");
            let lang = ctrl.lang(session);
            session.reset();
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::ErrorUserNotFound.render(lang),
                    keyboards::main_menu(lang),
                ),
            )
            .await?;
            Ok(None)
        }
    }
}

fn book_list_section(user: &User, lang: Language) -> String {
    if user.books.is_empty() {
        return Msg::ProfileNoBooks.render(lang);
    }
    let mut section = Msg::BooksHeader.render(lang);
    section.push('\n');
    let items: Vec<String> = user
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
    section.push_str(&items.join("\n\n"));

    let remaining = MAX_BOOKS.saturating_sub(user.books.len());
    if remaining > 0 {
        section.push_str("\n\n");
        section.push_str(&Msg::BooksRemaining { remaining }.render(lang));
    }
    section
}

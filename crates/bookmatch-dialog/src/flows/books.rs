// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Add-book dialog: the registration book steps, invoked from idle or the
//! profile menu, gated up front by the three-book cap.

use bookmatch_core::{
    BookmatchError, Contact, ConvState, DraftBook, NewBook, Reply, Session, MAX_BOOKS,
};
use bookmatch_i18n::{Label, Msg};
use tracing::warn;

use crate::condition::normalize_condition;
use crate::controller::Controller;
use crate::keyboards;

/// Entry point (`/add`, Add Book buttons). Rejected with no state change
/// when the user is already at the cap.
pub async fn start(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    let Some(user) = ctrl.users.get_user(contact.id).await? else {
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

    if user.books.len() >= MAX_BOOKS {
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(
                    Msg::BookLimitReached.render(lang),
                    keyboards::main_menu(lang),
                ),
            )
            .await;
    }

    session.enter(ConvState::AddingBook, 1);
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::BookAddTitle.render(lang),
            keyboards::back(Label::Cancel, lang),
        ),
    )
    .await
}

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
            Msg::BookAddCancelled.render(lang),
            keyboards::main_menu(lang),
        ),
    )
    .await
}

pub async fn step(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
    text: &str,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    match session.step {
        1 => {
            session.temp.draft = Some(DraftBook {
                title: Some(text.to_string()),
                author: None,
            });
            session.step = 2;
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::RegistrationAuthor.render(lang),
                    keyboards::back(Label::Cancel, lang),
                ),
            )
            .await
        }
        2 => {
            let Some(draft) = session.temp.draft.as_mut() else {
                session.step = 1;
                return ctrl
                    .send(
                        contact.id,
                        Reply::with_keyboard(
                            Msg::BookAddTitle.render(lang),
                            keyboards::back(Label::Cancel, lang),
                        ),
                    )
                    .await;
            };
            draft.author = Some(text.to_string());
            session.step = 3;
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::RegistrationCondition.render(lang),
                    keyboards::condition(lang),
                ),
            )
            .await
        }
        3 => {
            let Some(condition) = normalize_condition(text, lang) else {
                return ctrl
                    .send(
                        contact.id,
                        Reply::with_keyboard(
                            Msg::ConditionReprompt.render(lang),
                            keyboards::condition(lang),
                        ),
                    )
                    .await;
            };

            if ctrl.users.get_user(contact.id).await?.is_none() {
                warn!(user_id = %contact.id, "user record missing during add-book");
                session.reset();
                return ctrl
                    .send(
                        contact.id,
                        Reply::with_keyboard(
                            Msg::ErrorUserNotFound.render(lang),
                            keyboards::main_menu(lang),
                        ),
                    )
                    .await;
            }

            let draft = session.temp.draft.take().unwrap_or_default();
            let (Some(title), Some(author)) = (draft.title, draft.author) else {
                return Err(BookmatchError::Internal(
                    "add-book draft lost title or author".into(),
                ));
            };
            ctrl.users
                .add_book(
                    contact.id,
                    &NewBook {
                        title,
                        author,
                        condition: Some(condition),
                    },
                )
                .await?;

            session.reset();
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::BookAddSuccess.render(lang),
                    keyboards::main_menu(lang),
                ),
            )
            .await
        }
        _ => Ok(()),
    }
}

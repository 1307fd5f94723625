// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-step registration: collect up to three books right after onboarding.
//!
//! Steps: 1 title, 2 author, 3 condition, 4 "add another?". Cancellation at
//! any step resets to idle without saving the partial book.

use bookmatch_core::{
    BookmatchError, Contact, ConvState, DraftBook, NewBook, Reply, Session, MAX_BOOKS,
};
use bookmatch_i18n::{Label, Msg};
use tracing::warn;

use crate::actions::is_yes;
use crate::condition::normalize_condition;
use crate::controller::Controller;
use crate::keyboards;

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
            Msg::RegistrationCancelled.render(lang),
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
                    keyboards::back(Label::CancelRegistration, lang),
                ),
            )
            .await
        }
        2 => {
            let Some(draft) = session.temp.draft.as_mut() else {
                // Scratch data vanished mid-dialog; start the book over.
                session.step = 1;
                return ctrl
                    .send(
                        contact.id,
                        Reply::with_keyboard(
                            Msg::RegistrationStart.render(lang),
                            keyboards::back(Label::CancelRegistration, lang),
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
                // Invalid condition: re-prompt, do not advance.
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

            let Some(user) = ctrl.users.get_user(contact.id).await? else {
                warn!(user_id = %contact.id, "user record missing during registration");
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
            };

            let draft = session.temp.draft.take().unwrap_or_default();
            let (Some(title), Some(author)) = (draft.title, draft.author) else {
                return Err(BookmatchError::Internal(
                    "registration draft lost title or author".into(),
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

            let count = user.books.len() + 1;
            if count < MAX_BOOKS {
                session.step = 4;
                ctrl.send(
                    contact.id,
                    Reply::with_keyboard(
                        Msg::RegistrationAddAnother {
                            remaining: MAX_BOOKS - count,
                        }
                        .render(lang),
                        keyboards::yes_no(lang),
                    ),
                )
                .await
            } else {
                complete(ctrl, contact, session).await
            }
        }
        4 => {
            if is_yes(text, lang) {
                session.enter(ConvState::Registration, 1);
                ctrl.send(
                    contact.id,
                    Reply::with_keyboard(
                        Msg::BookAddTitle.render(lang),
                        keyboards::back(Label::CancelRegistration, lang),
                    ),
                )
                .await
            } else {
                // Anything but an explicit yes completes registration.
                complete(ctrl, contact, session).await
            }
        }
        _ => Ok(()),
    }
}

async fn complete(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    session.reset();
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::RegistrationComplete.render(lang),
            keyboards::main_menu(lang),
        ),
    )
    .await
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Onboarding and language selection.
//!
//! New users pick a language first and are dropped straight into book
//! registration; returning users land on the main menu. `/language`
//! reopens the picker at any time.

use bookmatch_core::{BookmatchError, Contact, ConvState, NewUser, Reply, Session};
use bookmatch_i18n::{language_by_name, Label, Msg, LANGUAGE_BACK};
use tracing::info;

use crate::controller::Controller;
use crate::keyboards;

/// `/start`: create the profile on first contact, otherwise show the menu.
pub async fn start(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    match ctrl.users.get_user(contact.id).await? {
        None => {
            ctrl.users
                .create_user(&NewUser {
                    id: contact.id,
                    username: contact.username.clone(),
                    first_name: contact.first_name.clone(),
                    language: ctrl.default_language,
                })
                .await?;
            info!(user_id = %contact.id, "new user registered");

            session.enter(ConvState::InitialLanguageSelection, 0);
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::Welcome.render(ctrl.default_language),
                    keyboards::language(),
                ),
            )
            .await
        }
        Some(user) => {
            session.language = Some(user.language);
            ctrl.send(
                contact.id,
                Reply::with_keyboard(
                    Msg::MainMenu.render(user.language),
                    keyboards::main_menu(user.language),
                ),
            )
            .await
        }
    }
}

/// First-contact language pick; a valid choice starts registration.
pub async fn pick_initial_language(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
    text: &str,
) -> Result<(), BookmatchError> {
    let Some(lang) = language_by_name(text) else {
        // Invalid pick: re-prompt without advancing.
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(
                    Msg::ErrorInvalidInput.render(ctrl.default_language),
                    keyboards::language(),
                ),
            )
            .await;
    };

    ctrl.users.set_language(contact.id, lang).await?;
    session.language = Some(lang);
    session.enter(ConvState::Registration, 1);

    ctrl.send(
        contact.id,
        Reply::with_keyboard(Msg::LanguageSelected.render(lang), keyboards::main_menu(lang)),
    )
    .await?;
    ctrl.send(
        contact.id,
        Reply::with_keyboard(
            Msg::RegistrationStart.render(lang),
            keyboards::back(Label::CancelRegistration, lang),
        ),
    )
    .await
}

/// `/language` or the menu button: open the picker.
pub async fn language_menu(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
) -> Result<(), BookmatchError> {
    let lang = ctrl.lang(session);
    session.enter(ConvState::LanguageSelection, 0);
    ctrl.send(
        contact.id,
        Reply::with_keyboard(Msg::LanguageSelection.render(lang), keyboards::language()),
    )
    .await
}

/// Language pick from the settings menu; returns to idle.
pub async fn pick_language(
    ctrl: &Controller,
    contact: &Contact,
    session: &mut Session,
    text: &str,
) -> Result<(), BookmatchError> {
    if text == LANGUAGE_BACK {
        session.reset();
        let lang = ctrl.lang(session);
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(Msg::MainMenu.render(lang), keyboards::main_menu(lang)),
            )
            .await;
    }

    let Some(lang) = language_by_name(text) else {
        let current = ctrl.lang(session);
        return ctrl
            .send(
                contact.id,
                Reply::with_keyboard(
                    Msg::ErrorInvalidInput.render(current),
                    keyboards::language(),
                ),
            )
            .await;
    };

    if ctrl.users.get_user(contact.id).await?.is_some() {
        ctrl.users.set_language(contact.id, lang).await?;
    }
    session.language = Some(lang);
    session.reset();

    ctrl.send(
        contact.id,
        Reply::with_keyboard(Msg::LanguageSelected.render(lang), keyboards::main_menu(lang)),
    )
    .await
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-user conversation controller.
//!
//! Every inbound text event flows through [`Controller::handle_event`]:
//! slash commands bypass any active dialog, localized menu labels are
//! normalized to canonical actions, and remaining text goes to the step
//! handler for the current session state. Any error inside a dialog step is
//! caught here — the session is force-reset to idle and the user gets one
//! generic error reply, so nobody is ever stranded mid-dialog.

use std::sync::Arc;

use tracing::{debug, error};

use bookmatch_core::{
    BookmatchError, ChatTransport, Contact, ConvState, DecisionAction, DecisionStore, Language,
    MatchStore, Reply, Session, SessionStore, UserId, UserStore,
};
use bookmatch_engine::{CandidateSelector, MatchEngine};
use bookmatch_i18n::Msg;

use crate::actions::{self, Action, Command};
use crate::flows;
use crate::keyboards;

/// Routes inbound events to dialog flows and owns the error boundary.
pub struct Controller {
    pub(crate) users: Arc<dyn UserStore>,
    pub(crate) matches: Arc<dyn MatchStore>,
    pub(crate) sessions: Arc<dyn SessionStore>,
    pub(crate) transport: Arc<dyn ChatTransport>,
    pub(crate) selector: CandidateSelector,
    pub(crate) engine: MatchEngine,
    pub(crate) default_language: Language,
    pub(crate) browse_timeout: chrono::Duration,
}

impl Controller {
    pub fn new(
        users: Arc<dyn UserStore>,
        decisions: Arc<dyn DecisionStore>,
        matches: Arc<dyn MatchStore>,
        sessions: Arc<dyn SessionStore>,
        transport: Arc<dyn ChatTransport>,
        default_language: Language,
        browse_timeout_secs: u64,
    ) -> Self {
        let selector = CandidateSelector::new(users.clone(), decisions.clone());
        let engine = MatchEngine::new(
            users.clone(),
            decisions,
            matches.clone(),
            transport.clone(),
        );
        Self {
            users,
            matches,
            sessions,
            transport,
            selector,
            engine,
            default_language,
            browse_timeout: chrono::Duration::seconds(browse_timeout_secs as i64),
        }
    }

    /// Handle one inbound text event for one user.
    ///
    /// Dialog errors are absorbed at this boundary (session reset plus a
    /// generic error reply); an `Err` escapes only if that error reply
    /// itself cannot be delivered.
    pub async fn handle_event(
        &self,
        contact: &Contact,
        text: &str,
    ) -> Result<(), BookmatchError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let mut session = self.sessions.load(contact.id);
        debug!(
            user_id = %contact.id,
            state = %session.state,
            step = session.step,
            "inbound event"
        );

        match self.dispatch(contact, text, &mut session).await {
            Ok(()) => {
                self.sessions.store(contact.id, session);
                Ok(())
            }
            Err(e) => {
                error!(
                    error = %e,
                    user_id = %contact.id,
                    state = %session.state,
                    "dialog step failed, resetting session"
                );
                let lang = self.lang(&session);
                session.reset();
                self.sessions.store(contact.id, session);
                self.transport
                    .reply(
                        contact.id,
                        Reply::with_keyboard(
                            Msg::ErrorGeneric.render(lang),
                            keyboards::main_menu(lang),
                        ),
                    )
                    .await
            }
        }
    }

    async fn dispatch(
        &self,
        contact: &Contact,
        text: &str,
        session: &mut Session,
    ) -> Result<(), BookmatchError> {
        // 1. Slash commands are the escape hatch: they work at any dialog
        //    depth and start from a clean idle state.
        if let Some(command) = Command::parse(text) {
            session.reset();
            return self.run_command(command, contact, session).await;
        }

        let lang = self.lang(session);
        let action = actions::resolve(text, lang);

        // 2. State-scoped actions are consulted before the global menu, so
        //    e.g. the profile trio owns its own buttons while inside it.
        if flows::profile::in_profile_states(session.state) {
            if let Some(action) = action {
                if flows::profile::handles(session.state, action) {
                    return flows::profile::handle_action(self, contact, session, action).await;
                }
            }
        }

        if session.state == ConvState::Registration
            && matches!(action, Some(Action::CancelRegistration) | Some(Action::Cancel))
        {
            return flows::registration::cancel(self, contact, session).await;
        }

        if session.state == ConvState::AddingBook && action == Some(Action::Cancel) {
            return flows::books::cancel(self, contact, session).await;
        }

        if session.state == ConvState::Browsing {
            match action {
                Some(Action::Like) => {
                    return flows::browse::act(self, contact, session, DecisionAction::Like).await;
                }
                Some(Action::Skip) => {
                    return flows::browse::act(self, contact, session, DecisionAction::Skip).await;
                }
                Some(Action::BackToMain) => {
                    return flows::browse::cancel(self, contact, session).await;
                }
                _ => {}
            }
        }

        // 3. Global menu actions, equivalent to their slash commands.
        match action {
            Some(Action::Browse) => {
                session.reset();
                return flows::browse::start(self, contact, session).await;
            }
            Some(Action::Profile) => {
                session.reset();
                return flows::profile::show_profile(self, contact, session).await;
            }
            Some(Action::Help) => {
                session.reset();
                return self.send_help(contact, session).await;
            }
            Some(Action::LanguageMenu) => {
                session.reset();
                return flows::onboarding::language_menu(self, contact, session).await;
            }
            Some(Action::BackToMain) => {
                session.reset();
                let lang = self.lang(session);
                return self
                    .send(
                        contact.id,
                        Reply::with_keyboard(
                            Msg::MainMenu.render(lang),
                            keyboards::main_menu(lang),
                        ),
                    )
                    .await;
            }
            _ => {}
        }

        // 4. Step handlers for the current dialog state. Unknown states and
        //    free text in idle fall through to a no-op.
        match session.state {
            ConvState::InitialLanguageSelection => {
                flows::onboarding::pick_initial_language(self, contact, session, text).await
            }
            ConvState::LanguageSelection => {
                flows::onboarding::pick_language(self, contact, session, text).await
            }
            ConvState::Registration => {
                flows::registration::step(self, contact, session, text).await
            }
            ConvState::AddingBook => flows::books::step(self, contact, session, text).await,
            _ => Ok(()),
        }
    }

    async fn run_command(
        &self,
        command: Command,
        contact: &Contact,
        session: &mut Session,
    ) -> Result<(), BookmatchError> {
        match command {
            Command::Start => flows::onboarding::start(self, contact, session).await,
            Command::Profile => flows::profile::show_profile(self, contact, session).await,
            Command::Browse => flows::browse::start(self, contact, session).await,
            Command::Add => flows::books::start(self, contact, session).await,
            Command::Matches => flows::matches::list(self, contact, session).await,
            Command::Status => flows::profile::toggle_status_command(self, contact, session).await,
            Command::Help => self.send_help(contact, session).await,
            Command::Language => flows::onboarding::language_menu(self, contact, session).await,
        }
    }

    async fn send_help(
        &self,
        contact: &Contact,
        session: &Session,
    ) -> Result<(), BookmatchError> {
        let lang = self.lang(session);
        self.send(
            contact.id,
            Reply::with_keyboard(Msg::Help.render(lang), keyboards::main_menu(lang)),
        )
        .await
    }

    /// Effective language for a session: the cached preference, or the
    /// configured default before any preference is known.
    pub(crate) fn lang(&self, session: &Session) -> Language {
        session.language.unwrap_or(self.default_language)
    }

    pub(crate) async fn send(&self, user: UserId, reply: Reply) -> Result<(), BookmatchError> {
        self.transport.reply(user, reply).await
    }
}

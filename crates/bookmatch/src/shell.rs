// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `bookmatch shell` command implementation.
//!
//! Launches an interactive REPL that plays the role of the chat transport:
//! typed lines become inbound events for a fixed local user, replies and
//! keyboard affordances are printed to the terminal. Useful for exercising
//! every dialog against a real database without any chat platform.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use bookmatch_config::model::BookmatchConfig;
use bookmatch_core::{
    Adapter, BookmatchError, ChatTransport, Contact, Keyboard, Language, Reply, UserId,
};
use bookmatch_dialog::Controller;
use bookmatch_session::MemorySessions;
use bookmatch_storage::SqliteStorage;

/// The fixed identity of the local shell user.
const SHELL_USER: i64 = 0;

/// Terminal-backed chat transport: replies print to stdout.
struct ShellTransport;

#[async_trait]
impl ChatTransport for ShellTransport {
    async fn reply(&self, _user: UserId, reply: Reply) -> Result<(), BookmatchError> {
        println!("{}", reply.text.cyan());
        if let Some(keyboard) = reply.keyboard {
            print_keyboard(&keyboard);
        }
        Ok(())
    }

    async fn send_direct(&self, user: UserId, text: &str) -> Result<bool, BookmatchError> {
        // Out-of-band notifications to other users surface as annotated lines.
        println!("{}", format!("[direct to {user}] {text}").yellow());
        Ok(true)
    }
}

fn print_keyboard(keyboard: &Keyboard) {
    if keyboard.remove || keyboard.rows.is_empty() {
        return;
    }
    for row in &keyboard.rows {
        println!("{}", format!("  [ {} ]", row.join(" | ")).dimmed());
    }
}

/// Runs the `bookmatch shell` interactive REPL.
pub async fn run_shell(config: BookmatchConfig) -> Result<(), BookmatchError> {
    let storage = Arc::new(SqliteStorage::open(&config.storage).await?);
    let sessions = Arc::new(MemorySessions::new(Duration::from_secs(
        config.session.ttl_secs,
    )));
    let transport = Arc::new(ShellTransport);

    let default_language: Language = config
        .bot
        .default_language
        .parse()
        .map_err(|_| {
            BookmatchError::Config(format!(
                "unsupported default language `{}`",
                config.bot.default_language
            ))
        })?;

    let controller = Controller::new(
        storage.clone(),
        storage.clone(),
        storage.clone(),
        sessions,
        transport,
        default_language,
        config.session.browse_timeout_secs,
    );

    let contact = Contact {
        id: UserId(SHELL_USER),
        username: Some("local".into()),
        first_name: "Local".into(),
    };

    info!(database = %config.storage.database_path, "shell session starting");
    println!(
        "{}",
        "bookmatch shell -- type /start to begin, ctrl-d to exit".dimmed()
    );

    let mut rl = DefaultEditor::new()
        .map_err(|e| BookmatchError::Internal(format!("readline init failed: {e}")))?;
    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                controller.handle_event(&contact, &line).await?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                return Err(BookmatchError::Internal(format!("readline error: {e}")));
            }
        }
    }

    storage.shutdown().await?;
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! bookmatch - a conversational book-swap matchmaking bot.
//!
//! Binary entry point: loads and validates configuration, initializes
//! tracing, and dispatches to subcommands. The `shell` subcommand drives
//! the full conversation core through a local terminal transport; a real
//! chat transport is wired in the same way via [`bookmatch_core::ChatTransport`].

mod shell;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// bookmatch - a conversational book-swap matchmaking bot.
#[derive(Parser, Debug)]
#[command(name = "bookmatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive local session against the configured database.
    Shell,
    /// Print the resolved configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match bookmatch_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            bookmatch_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.bot.log_level.clone())),
        )
        .init();

    match cli.command {
        Some(Commands::Shell) => {
            if let Err(e) = shell::run_shell(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("bookmatch: use --help for available commands");
        }
    }
}

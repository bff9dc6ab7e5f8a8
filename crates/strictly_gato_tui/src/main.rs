//! Strictly Gato - Unified CLI
//!
//! Tic-tac-toe in the terminal, with the game saved between runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GatoConfig;
use std::path::Path;
use strictly_gato::{FileStore, GameStorage, KeyValueStore, MemoryStore, evaluate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GatoConfig::load_or_default(&cli.config)?;
    if let Some(path) = cli.storage.clone() {
        config = config.with_storage_path(path);
    }

    let command = cli.command.unwrap_or(Command::Play);
    match command {
        Command::Play => init_file_tracing(config.log_file())?,
        Command::Show | Command::Reset => init_stderr_tracing(),
    }
    info!(?command, ephemeral = cli.ephemeral, storage = %config.storage_path().display(), "Starting strictly_gato");

    if cli.ephemeral {
        dispatch(command, MemoryStore::new(), &config)
    } else {
        dispatch(command, FileStore::open(config.storage_path()), &config)
    }
}

/// Runs `command` against the chosen store.
fn dispatch<S: KeyValueStore>(command: Command, store: S, config: &GatoConfig) -> Result<()> {
    match command {
        Command::Play => tui::run_tui(store, config),
        Command::Show => {
            show_saved_game(store);
            Ok(())
        }
        Command::Reset => {
            reset_saved_game(store);
            Ok(())
        }
    }
}

/// Prints the saved board and whose turn it is.
#[instrument(skip(store))]
fn show_saved_game<S: KeyValueStore>(store: S) {
    match GameStorage::new(store).load() {
        Some(saved) => {
            println!("{}", saved.board().display());
            println!();
            println!("{} to move ({})", saved.turn(), evaluate(saved.board()));
        }
        None => println!("No saved game"),
    }
}

/// Clears the saved game.
#[instrument(skip(store))]
fn reset_saved_game<S: KeyValueStore>(store: S) {
    GameStorage::new(store).clear();
    println!("Saved game cleared");
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

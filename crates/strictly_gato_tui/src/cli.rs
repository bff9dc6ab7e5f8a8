//! Command-line interface for strictly_gato.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Gato - tic-tac-toe in the terminal that remembers your game
#[derive(Parser, Debug)]
#[command(name = "strictly_gato")]
#[command(about = "Two-player tic-tac-toe with a saved, resumable game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "gato.toml", global = true)]
    pub config: PathBuf,

    /// Saved-game file, overrides `storage_path` from the config
    #[arg(short, long, global = true)]
    pub storage: Option<PathBuf>,

    /// Keep the game in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI, resuming the saved game if there is one
    Play,

    /// Print the saved board and whose turn it is
    Show,

    /// Forget the saved game
    Reset,
}

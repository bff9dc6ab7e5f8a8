//! Strictly Gato - tic-tac-toe that survives restarts
//!
//! Pure game engine for a two-player, single-screen tic-tac-toe.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a [`Board`]
//! - **State**: [`GameState`] with its two transitions, `play_move` and `reset`
//! - **Persistence**: [`KeyValueStore`] backends and the [`GameStorage`] layout
//! - **Session**: [`GameSession`], the owned handle a front end drives
//!
//! # Example
//!
//! ```
//! use strictly_gato::{GameSession, MemoryStore, MoveOutcome, Position};
//!
//! let mut session = GameSession::restore(MemoryStore::new());
//! assert_eq!(session.play_move(Position::Center), MoveOutcome::Continue);
//! assert_eq!(session.play_move(Position::Center), MoveOutcome::Ignored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod persistence;
mod position;
mod rules;
mod session;
mod state;
mod types;

// Crate-level exports - Game types
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Rules
pub use rules::{WINNING_LINES, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - State and session
pub use session::GameSession;
pub use state::{GameState, MoveOutcome};

// Crate-level exports - Persistence
pub use error::StoreError;
pub use persistence::{
    BOARD_KEY, FileStore, GameStorage, KeyValueStore, MemoryStore, SavedGame, TURN_KEY,
};

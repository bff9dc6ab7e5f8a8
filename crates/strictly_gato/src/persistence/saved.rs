//! Saved-game entries on top of a key-value store.

use super::store::KeyValueStore;
use crate::error::StoreError;
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Key holding the board as a JSON array of 9 `null` / `"X"` / `"O"`.
pub const BOARD_KEY: &str = "board";

/// Key holding the player to move, `X` or `O`.
pub const TURN_KEY: &str = "turn";

/// Board and turn read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct SavedGame {
    /// The saved board.
    board: Board,
    /// The player to move.
    turn: Player,
}

/// Saves, loads and clears the current game in a [`KeyValueStore`].
///
/// Storage failures never reach the caller: they are logged and the game
/// carries on. Anything missing or unparsable loads as "no saved game".
#[derive(Debug, Clone)]
pub struct GameStorage<S> {
    store: S,
}

impl<S: KeyValueStore> GameStorage<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Writes board and turn, overwriting any previous save.
    #[instrument(skip(self, board))]
    pub fn save(&mut self, board: &Board, turn: Player) {
        if let Err(e) = self.try_save(board, turn) {
            warn!(error = %e, "Failed to save game");
        }
    }

    fn try_save(&mut self, board: &Board, turn: Player) -> Result<(), StoreError> {
        let cells: Vec<Option<Player>> = board.squares().iter().map(|s| s.player()).collect();
        let encoded = serde_json::to_string(&cells)?;
        self.store.save(BOARD_KEY, &encoded)?;
        self.store.save(TURN_KEY, &turn.to_string())?;
        debug!(board = %encoded, %turn, "Game saved");
        Ok(())
    }

    /// Reads the saved game, if a complete and valid one exists.
    #[instrument(skip(self))]
    pub fn load(&self) -> Option<SavedGame> {
        let board = self.read(BOARD_KEY)?;
        let turn = self.read(TURN_KEY)?;

        let cells = match serde_json::from_str::<[Option<Player>; 9]>(&board) {
            Ok(cells) => cells,
            Err(e) => {
                warn!(error = %e, "Saved board is invalid, ignoring save");
                return None;
            }
        };
        let turn = match Player::from_str(&turn) {
            Ok(turn) => turn,
            Err(_) => {
                warn!(turn = %turn, "Saved turn is invalid, ignoring save");
                return None;
            }
        };

        debug!(%turn, "Saved game loaded");
        Some(SavedGame::new(Board::from_squares(cells.map(Square::from)), turn))
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.load(key) {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                debug!(key, "No saved value");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read saved value");
                None
            }
        }
    }

    /// Removes both saved entries.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        for key in [BOARD_KEY, TURN_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Failed to clear saved value");
            }
        }
        debug!("Saved game cleared");
    }
}

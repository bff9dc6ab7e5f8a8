//! A game session: the state plus the storage it is written through to.

use crate::persistence::{GameStorage, KeyValueStore};
use crate::position::Position;
use crate::state::{GameState, MoveOutcome};
use crate::types::{Board, GameStatus, Player};
use tracing::{info, instrument};

/// The single game of a program run.
///
/// Created by restoring from storage, mutated only through
/// [`play_move`](Self::play_move) and [`reset`](Self::reset). Every applied
/// move is saved before it is reported; a reset clears the save.
#[derive(Debug)]
pub struct GameSession<S> {
    state: GameState,
    storage: GameStorage<S>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Opens a session, resuming the saved game when one is present.
    #[instrument(skip(store))]
    pub fn restore(store: S) -> Self {
        let storage = GameStorage::new(store);
        let state = match storage.load() {
            Some(saved) => {
                let state = GameState::restore(saved.board().clone(), *saved.turn());
                info!(turn = %state.turn(), status = %state.status(), "Resumed saved game");
                state
            }
            None => {
                info!("No saved game, starting fresh");
                GameState::new()
            }
        };
        Self { state, storage }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The player to move next.
    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// The storage this session writes to.
    pub fn storage(&self) -> &GameStorage<S> {
        &self.storage
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Ignored moves leave storage untouched.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, pos: Position) -> MoveOutcome {
        let outcome = self.state.play_move(pos);
        if outcome.is_applied() {
            self.storage.save(self.state.board(), self.state.turn());
        }
        outcome
    }

    /// Starts over and forgets the saved game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.storage.clear();
        info!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, TURN_KEY};

    #[test]
    fn test_fresh_session_without_save() {
        let session = GameSession::restore(MemoryStore::new());
        assert_eq!(session.state(), &GameState::new());
        assert!(session.storage().store().is_empty());
    }

    #[test]
    fn test_applied_move_is_saved() {
        let mut session = GameSession::restore(MemoryStore::new());
        let _ = session.play_move(Position::Center);

        let saved = session.storage().load().expect("saved game");
        assert_eq!(saved.board(), session.board());
        assert_eq!(*saved.turn(), Player::O);
    }

    #[test]
    fn test_ignored_move_writes_nothing() {
        let mut session = GameSession::restore(MemoryStore::new());
        let _ = session.play_move(Position::Center);
        let before = session.storage().store().clone();

        assert_eq!(session.play_move(Position::Center), MoveOutcome::Ignored);
        assert_eq!(session.storage().store(), &before);
    }

    #[test]
    fn test_reset_clears_storage() {
        let mut session = GameSession::restore(MemoryStore::new());
        let _ = session.play_move(Position::Center);
        session.reset();

        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.storage().store().load(TURN_KEY).unwrap(), None);
        assert!(session.storage().store().is_empty());
    }
}

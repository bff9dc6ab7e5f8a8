//! In-memory game state and its two transitions.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Signal returned by [`GameState::play_move`].
///
/// The presentation layer reacts to these: a win gets the celebration and
/// the end-of-game panel, a draw gets the panel only.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The cell was occupied or the game was already decided. Nothing changed.
    Ignored,
    /// The move was placed and the game goes on.
    Continue,
    /// The move completed a line for this player.
    Won(Player),
    /// The move filled the board without a line.
    Draw,
}

impl MoveOutcome {
    /// True for every outcome that changed the board.
    pub fn is_applied(self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}

/// Board, turn and status of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a state from a saved board and turn.
    ///
    /// The status is derived from the board, so a game saved on its final
    /// move comes back finished.
    #[instrument(skip(board))]
    pub fn restore(board: Board, turn: Player) -> Self {
        let status = rules::evaluate(&board);
        debug!(%status, filled = board.filled(), "Restored game state");
        Self {
            board,
            turn,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark.
    ///
    /// Occupied cells and decided games are a no-op returning
    /// [`MoveOutcome::Ignored`]. Otherwise the mark is written, the turn
    /// flips, and the board is evaluated for a win or a draw.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play_move(&mut self, pos: Position) -> MoveOutcome {
        if self.status.is_over() {
            debug!(status = %self.status, "Game already decided, ignoring move");
            return MoveOutcome::Ignored;
        }
        if !self.board.is_empty(pos) {
            debug!("Square occupied, ignoring move");
            return MoveOutcome::Ignored;
        }

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));
        self.turn = player.opponent();

        self.status = rules::evaluate(&self.board);
        let outcome = match self.status {
            GameStatus::InProgress => MoveOutcome::Continue,
            GameStatus::Won(winner) => MoveOutcome::Won(winner),
            GameStatus::Draw => MoveOutcome::Draw,
        };
        if self.status.is_over() {
            info!(status = %self.status, "Game finished");
        }
        outcome
    }

    /// Back to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: &mut GameState, indices: &[usize]) -> Vec<MoveOutcome> {
        indices
            .iter()
            .map(|&i| state.play_move(Position::from_index(i).unwrap()))
            .collect()
    }

    #[test]
    fn test_first_move_center() {
        let mut state = GameState::new();
        assert_eq!(state.play_move(Position::Center), MoveOutcome::Continue);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.turn(), Player::O);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut state = GameState::new();
        let _ = state.play_move(Position::TopLeft);
        let before = state.clone();

        assert_eq!(state.play_move(Position::TopLeft), MoveOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_winning_move_locks_game() {
        let mut state = GameState::new();
        // X: 0, 1, 2 / O: 3, 4
        let outcomes = play_all(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::X)));
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        // Turn still flips on the winning move.
        assert_eq!(state.turn(), Player::O);

        let before = state.clone();
        assert_eq!(state.play_move(Position::BottomLeft), MoveOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_reported_once() {
        let mut state = GameState::new();
        // Ends as O X O / X O X / X O X
        let outcomes = play_all(&mut state, &[1, 0, 3, 4, 5, 2, 6, 7, 8]);
        assert_eq!(outcomes.last(), Some(&MoveOutcome::Draw));
        assert!(outcomes[..8].iter().all(|o| *o == MoveOutcome::Continue));
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.play_move(Position::Center), MoveOutcome::Ignored);
    }

    #[test]
    fn test_each_applied_move_fills_one_cell_and_flips_turn() {
        let mut state = GameState::new();
        for (i, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
            let turn = state.turn();
            let outcome = state.play_move(Position::from_index(index).unwrap());
            assert!(outcome.is_applied());
            assert_eq!(state.board().filled(), i + 1);
            assert_eq!(state.turn(), turn.opponent());
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = GameState::new();
        let _ = play_all(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state, GameState::new());
        state.reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_restore_derives_status() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let state = GameState::restore(board, Player::X);
        assert_eq!(state.status(), GameStatus::Won(Player::O));
        assert_eq!(state.turn(), Player::X);
    }
}

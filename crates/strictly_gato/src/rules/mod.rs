//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules never mutate state;
//! the game state decides what to do with their answers.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the status a board represents.
///
/// A winning line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_evaluate_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_on_full_board_is_win() {
        // X O X / O X O / O X X - full, X owns the main diagonal
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::O,
            Player::O, Player::X, Player::X,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }
}

//! Tests for the game session lifecycle against the public API.

use strictly_gato::{
    BOARD_KEY, Board, GameSession, GameState, GameStatus, GameStorage, KeyValueStore,
    MemoryStore, MoveOutcome, Player, Position, Square, TURN_KEY,
};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index 0-8")
}

fn board_from(cells: [Option<Player>; 9]) -> Board {
    Board::from_squares(cells.map(Square::from))
}

/// A store already holding `board` with `turn` to move.
fn store_with(board: &Board, turn: Player) -> MemoryStore {
    let mut storage = GameStorage::new(MemoryStore::new());
    storage.save(board, turn);
    storage.into_inner()
}

#[test]
fn test_x_opens_in_center() {
    let mut session = GameSession::restore(MemoryStore::new());

    let outcome = session.play_move(pos(4));

    assert_eq!(outcome, MoveOutcome::Continue);
    assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(session.turn(), Player::O);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_top_row_completes_for_x() {
    use Player::{O, X};
    let board = board_from([Some(X), Some(X), None, Some(O), Some(O), None, None, None, None]);
    let mut session = GameSession::restore(store_with(&board, X));

    assert_eq!(session.play_move(pos(2)), MoveOutcome::Won(X));
    assert_eq!(session.status(), GameStatus::Won(X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    use Player::{O, X};
    // X O X / O X O / O X _ with O to move; O fills the last cell.
    let board = board_from([
        Some(X), Some(O), Some(X),
        Some(O), Some(X), Some(O),
        Some(O), Some(X), None,
    ]);
    let mut session = GameSession::restore(store_with(&board, O));

    assert_eq!(session.play_move(pos(8)), MoveOutcome::Draw);
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(
        session.board(),
        &board_from([
            Some(X), Some(O), Some(X),
            Some(O), Some(X), Some(O),
            Some(O), Some(X), Some(O),
        ])
    );
}

#[test]
fn test_draw_through_alternating_moves() {
    let mut session = GameSession::restore(MemoryStore::new());
    let outcomes: Vec<_> = [1, 0, 3, 4, 5, 2, 6, 7, 8]
        .into_iter()
        .map(|i| session.play_move(pos(i)))
        .collect();

    assert_eq!(
        outcomes.iter().filter(|o| **o == MoveOutcome::Draw).count(),
        1
    );
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Draw));
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut session = GameSession::restore(MemoryStore::new());
    let _ = session.play_move(pos(0));
    let _ = session.play_move(pos(4));
    let before = session.state().clone();

    assert_eq!(session.play_move(pos(0)), MoveOutcome::Ignored);
    assert_eq!(session.state(), &before);
}

#[test]
fn test_reset_after_win() {
    let mut session = GameSession::restore(MemoryStore::new());
    for i in [0, 3, 1, 4, 2] {
        let _ = session.play_move(pos(i));
    }
    assert_eq!(session.status(), GameStatus::Won(Player::X));

    session.reset();

    assert_eq!(session.state(), &GameState::new());
    let store = session.storage().store();
    assert_eq!(store.load(BOARD_KEY).unwrap(), None);
    assert_eq!(store.load(TURN_KEY).unwrap(), None);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut session = GameSession::restore(MemoryStore::new());
    for i in [0, 3, 1, 4, 2] {
        let _ = session.play_move(pos(i));
    }
    let before = session.state().clone();

    for i in [5, 6, 7, 8] {
        assert_eq!(session.play_move(pos(i)), MoveOutcome::Ignored);
    }
    assert_eq!(session.state(), &before);
}

#[test]
fn test_saved_state_restored_exactly() {
    use Player::{O, X};
    let board = board_from([Some(X), None, Some(O), None, Some(X), None, None, None, None]);

    let session = GameSession::restore(store_with(&board, O));

    assert_eq!(session.board(), &board);
    assert_eq!(session.turn(), O);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_session_resumes_where_previous_left_off() {
    let mut first = GameSession::restore(MemoryStore::new());
    for i in [4, 0, 8] {
        let _ = first.play_move(pos(i));
    }
    let store = first.storage().store().clone();

    let second = GameSession::restore(store);
    assert_eq!(second.state(), first.state());
}

#[test]
fn test_corrupt_save_starts_fresh() {
    let mut store = MemoryStore::new();
    store.save(BOARD_KEY, "{\"oops\": true}").unwrap();
    store.save(TURN_KEY, "O").unwrap();

    let session = GameSession::restore(store);
    assert_eq!(session.state(), &GameState::new());
}

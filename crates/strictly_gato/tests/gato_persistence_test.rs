//! Tests for on-disk persistence of saved games.

use tempfile::TempDir;

use strictly_gato::{
    FileStore, GameSession, GameStatus, KeyValueStore, MoveOutcome, Player, Position, TURN_KEY,
};

#[test]
fn test_game_survives_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("save.json");

    let mut session = GameSession::restore(FileStore::open(&path));
    let _ = session.play_move(Position::TopLeft);
    let _ = session.play_move(Position::Center);
    let expected = session.state().clone();
    drop(session);

    let resumed = GameSession::restore(FileStore::open(&path));
    assert_eq!(resumed.state(), &expected);
    assert_eq!(resumed.turn(), Player::X);
}

#[test]
fn test_finished_game_stays_finished_after_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("save.json");

    let mut session = GameSession::restore(FileStore::open(&path));
    let mut last = MoveOutcome::Ignored;
    for i in [0, 3, 1, 4, 2] {
        last = session.play_move(Position::from_index(i).unwrap());
    }
    assert_eq!(last, MoveOutcome::Won(Player::X));
    drop(session);

    let mut resumed = GameSession::restore(FileStore::open(&path));
    assert_eq!(resumed.status(), GameStatus::Won(Player::X));
    assert_eq!(resumed.play_move(Position::BottomRight), MoveOutcome::Ignored);
}

#[test]
fn test_reset_removes_keys_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("save.json");

    let mut session = GameSession::restore(FileStore::open(&path));
    let _ = session.play_move(Position::Center);
    session.reset();
    drop(session);

    let store = FileStore::open(&path);
    assert_eq!(store.load(TURN_KEY).unwrap(), None);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.trim(), "{}");
}

#[test]
fn test_missing_file_starts_fresh() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let session = GameSession::restore(FileStore::open(dir.path().join("absent.json")));
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.board().filled(), 0);
    assert!(!dir.path().join("absent.json").exists());
}

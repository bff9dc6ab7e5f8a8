//! Keyboard mapping onto board positions.

use crossterm::event::KeyCode;
use strictly_gato::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}

/// Maps the keys `1`-`9` onto cells in reading order.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        digit => Position::from_index(digit as usize - 1),
    }
}

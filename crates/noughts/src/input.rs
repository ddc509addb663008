//! Keyboard mapping.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select a specific cell (digit keys).
    Select(Position),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new game.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action.
///
/// Digits `1`-`9` address cells row-major, so `1` is top-left and `9`
/// bottom-right.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::NewGame),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Select),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|column| (row, column)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };
    target
        .and_then(|(row, column)| Position::from_row_column(row, column))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_row_major() {
        assert_eq!(
            action_for(KeyCode::Char('1')),
            Some(Action::Select(Position::TopLeft))
        );
        assert_eq!(
            action_for(KeyCode::Char('5')),
            Some(Action::Select(Position::Center))
        );
        assert_eq!(
            action_for(KeyCode::Char('9')),
            Some(Action::Select(Position::BottomRight))
        );
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }
}

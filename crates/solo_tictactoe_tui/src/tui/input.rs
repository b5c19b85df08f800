//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use solo_tictactoe::Position;

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the human's mark.
    Place(Position),
    /// Move the highlight.
    Cursor(Position),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
    /// Key has no meaning here.
    Ignore,
}

/// Maps a key to an action. While an announcement is showing, Enter starts
/// the next game and other board keys are ignored.
pub fn action_for(key: KeyCode, cursor: Position, alert_open: bool) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Enter if alert_open => Action::Reset,
        _ if alert_open => Action::Ignore,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

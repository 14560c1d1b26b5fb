//! Keyboard input mapped to user intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// A user gesture, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select a specific cell.
    Select(Position),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Move the cursor one cell.
    MoveCursor(Direction),
    /// Start a new game, keeping scores and history.
    NewGame,
    /// Start a new game and clear scores and history.
    ResetAll,
    /// Switch between light and dark mode.
    ToggleTheme,
    /// Leave the application.
    Quit,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Maps a key press to an intent. Unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    let intent = match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Intent::Select(Position::from_index(index)?)
        }
        KeyCode::Up | KeyCode::Char('k') => Intent::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Intent::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Intent::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Intent::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::SelectCursor,
        KeyCode::Char('n') | KeyCode::Char('N') => Intent::NewGame,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::ResetAll,
        KeyCode::Char('t') | KeyCode::Char('T') => Intent::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

/// Moves the cursor, stopping at the board edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

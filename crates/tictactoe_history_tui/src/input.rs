//! Keyboard mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_history::Position;

/// Direction of a cursor step on the board.
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

/// What the user asked for with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the board cursor.
    Cursor(Direction),
    /// Play at the cursor.
    PlayAtCursor,
    /// Play at a cell index (0-8).
    Play(usize),
    /// Select the previous history entry.
    StepBack,
    /// Select the next history entry.
    StepForward,
    /// Select the game start.
    JumpStart,
    /// Select the latest move.
    JumpLatest,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an intent. Key releases and unbound keys map to `None`.
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Intent::Quit);
    }

    let intent = match key.code {
        KeyCode::Up => Intent::Cursor(Direction::Up),
        KeyCode::Down => Intent::Cursor(Direction::Down),
        KeyCode::Left => Intent::Cursor(Direction::Left),
        KeyCode::Right => Intent::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::PlayAtCursor,
        KeyCode::Char(c @ '1'..='9') => Intent::Play(c as usize - '1' as usize),
        KeyCode::Char('[') | KeyCode::PageUp => Intent::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Intent::StepForward,
        KeyCode::Home => Intent::JumpStart,
        KeyCode::End => Intent::JumpLatest,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(intent_for(press(KeyCode::Char('1'))), Some(Intent::Play(0)));
        assert_eq!(intent_for(press(KeyCode::Char('5'))), Some(Intent::Play(4)));
        assert_eq!(intent_for(press(KeyCode::Char('9'))), Some(Intent::Play(8)));
        assert_eq!(intent_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            intent_for(press(KeyCode::Char('['))), Some(Intent::StepBack),
        );
        assert_eq!(
            intent_for(press(KeyCode::PageDown)),
            Some(Intent::StepForward),
        );
        assert_eq!(intent_for(press(KeyCode::Home)), Some(Intent::JumpStart));
        assert_eq!(intent_for(press(KeyCode::End)), Some(Intent::JumpLatest));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(intent_for(press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(intent_for(press(KeyCode::Esc)), Some(Intent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intent_for(ctrl_c), Some(Intent::Quit));
        let ctrl_digit = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
        assert_eq!(intent_for(ctrl_digit), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(intent_for(release), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(
            move_cursor(Position::Center, Direction::Up),
            Position::TopCenter,
        );
        assert_eq!(
            move_cursor(Position::Center, Direction::Right),
            Position::MiddleRight,
        );
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Down),
            Position::MiddleLeft,
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Left),
            Position::BottomCenter,
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Up),
            Position::TopLeft,
        );
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Left),
            Position::TopLeft,
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight,
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, Direction::Right),
            Position::MiddleRight,
        );
    }
}

//! Application state and intent handling.

use crate::config::MarkColors;
use crate::input::{Intent, move_cursor};
use std::sync::mpsc::{self, Receiver};
use tictactoe_history::{GameView, Position, Session};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App {
    session: Session,
    updates: Receiver<GameView>,
    view: GameView,
    cursor: Position,
    notice: Option<String>,
    colors: MarkColors,
}

impl App {
    /// Creates an application at the game start.
    pub fn new(colors: MarkColors) -> Self {
        let (tx, updates) = mpsc::channel();
        let mut session = Session::new();
        session.subscribe(tx);
        let view = session.view();
        Self {
            session,
            updates,
            view,
            cursor: Position::Center,
            notice: None,
            colors,
        }
    }

    /// Latest view received from the session.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message about the last refused action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Colors for the marks.
    pub fn colors(&self) -> MarkColors {
        self.colors
    }

    /// Applies one user intent.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
            Intent::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Intent::PlayAtCursor => self.play(self.cursor.to_index()),
            Intent::Play(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.play(cell);
            }
            Intent::StepBack => {
                if let Some(index) = self.view.current_index.checked_sub(1) {
                    self.jump(index);
                }
            }
            Intent::StepForward => {
                let index = self.view.current_index + 1;
                if index < self.view.history_len {
                    self.jump(index);
                }
            }
            Intent::JumpStart => self.jump(0),
            Intent::JumpLatest => self.jump(self.view.history_len - 1),
        }
        self.sync();
        Flow::Continue
    }

    fn play(&mut self, cell: usize) {
        match self.session.try_play(cell) {
            Ok(mov) => {
                debug!(%mov, "Move applied");
                self.notice = None;
            }
            Err(error) => {
                debug!(%error, "Move refused");
                self.notice = Some(error.to_string());
            }
        }
    }

    fn jump(&mut self, index: usize) {
        match self.session.jump_to(index) {
            Ok(()) => self.notice = None,
            Err(error) => self.notice = Some(error.to_string()),
        }
    }

    /// Drains pending session updates, keeping the newest view.
    fn sync(&mut self) {
        if let Some(view) = self.updates.try_iter().last() {
            self.view = view;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use tictactoe_history::{GameStatus, Player, Square};

    fn app() -> App {
        App::new(MarkColors::default())
    }

    #[test]
    fn test_play_at_cursor_uses_center_first() {
        let mut app = app();
        assert_eq!(app.apply(Intent::PlayAtCursor), Flow::Continue);
        assert_eq!(
            app.view().board.get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.view().status, GameStatus::InProgress(Player::O));
    }

    #[test]
    fn test_cursor_then_play() {
        let mut app = app();
        app.apply(Intent::Cursor(Direction::Up));
        app.apply(Intent::Cursor(Direction::Left));
        assert_eq!(app.cursor(), Position::TopLeft);
        app.apply(Intent::PlayAtCursor);
        assert_eq!(
            app.view().board.get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_refused_move_sets_notice() {
        let mut app = app();
        app.apply(Intent::Play(4));
        app.apply(Intent::Play(4));
        assert_eq!(app.notice(), Some("Square Center is already occupied"));
        assert_eq!(app.view().history_len, 2);

        app.apply(Intent::Play(0));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_history_navigation() {
        let mut app = app();
        for cell in [0, 4, 8] {
            app.apply(Intent::Play(cell));
        }
        app.apply(Intent::StepBack);
        assert_eq!(app.view().current_index, 2);
        app.apply(Intent::JumpStart);
        assert_eq!(app.view().current_index, 0);
        app.apply(Intent::StepBack);
        assert_eq!(app.view().current_index, 0);
        app.apply(Intent::StepForward);
        assert_eq!(app.view().current_index, 1);
        app.apply(Intent::JumpLatest);
        assert_eq!(app.view().current_index, 3);
        app.apply(Intent::StepForward);
        assert_eq!(app.view().current_index, 3);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_play_from_past_branches() {
        let mut app = app();
        for cell in [0, 4, 8] {
            app.apply(Intent::Play(cell));
        }
        app.apply(Intent::JumpStart);
        app.apply(Intent::Play(2));
        assert_eq!(app.view().history_len, 2);
        assert_eq!(app.view().current_index, 1);
    }

    #[test]
    fn test_quit() {
        assert_eq!(app().apply(Intent::Quit), Flow::Quit);
    }
}

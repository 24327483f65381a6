//! Game session with change notification.
//!
//! A [`Session`] owns one [`HistoryStore`] and tells its listeners about
//! every state change, so a shell can re-render without polling.

use super::action::{Move, MoveError};
use super::history::{HistoryError, HistoryStore};
use super::view::GameView;
use std::sync::mpsc::Sender;
use tracing::{debug, instrument};

/// Receives the new view after each state change.
pub trait Listener {
    /// Called once per successful move or jump.
    fn state_changed(&mut self, view: &GameView);
}

impl<F> Listener for F
where
    F: FnMut(&GameView),
{
    fn state_changed(&mut self, view: &GameView) {
        self(view)
    }
}

impl Listener for Sender<GameView> {
    fn state_changed(&mut self, view: &GameView) {
        if self.send(view.clone()).is_err() {
            debug!("Listener channel closed, dropping update");
        }
    }
}

/// One live game: a history plus whoever is watching it.
#[derive(Default)]
pub struct Session {
    store: HistoryStore,
    listeners: Vec<Box<dyn Listener>>,
}

impl Session {
    /// Creates a session at the empty board with no listeners.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for future state changes.
    pub fn subscribe(&mut self, listener: impl Listener + 'static) {
        self.listeners.push(Box::new(listener));
        debug!(listeners = self.listeners.len(), "Listener subscribed");
    }

    /// The underlying history.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Current render-ready view.
    pub fn view(&self) -> GameView {
        self.store.view()
    }

    /// Plays at `cell`, ignoring illegal moves. Listeners hear only about
    /// moves that were applied.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, cell: usize) {
        if let Err(error) = self.try_play(cell) {
            debug!(%error, "Ignoring move");
        }
    }

    /// Plays at `cell`, reporting why a move was refused.
    #[instrument(skip(self))]
    pub fn try_play(&mut self, cell: usize) -> Result<Move, MoveError> {
        let action = self.store.try_play(cell)?;
        self.notify();
        Ok(action)
    }

    /// Selects history entry `index`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.store.jump_to(index)?;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let view = self.store.view();
        for listener in &mut self.listeners {
            listener.state_changed(&view);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_closure_listener_sees_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::new();
        let sink = Rc::clone(&seen);
        session.subscribe(move |view: &GameView| sink.borrow_mut().push(view.current_index));

        session.play_move(4);
        session.play_move(4); // occupied, ignored
        session.play_move(0);
        session.jump_to(1).expect("index exists");
        assert!(session.jump_to(7).is_err());

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_channel_listener_receives_views() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut session = Session::new();
        session.subscribe(tx);

        session.play_move(8);
        let view = rx.try_recv().expect("view delivered");
        assert_eq!(view, session.view());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_channel_is_tolerated() {
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        let mut session = Session::new();
        session.subscribe(tx);
        session.play_move(0);
        assert_eq!(session.store().current_index(), 1);
    }
}

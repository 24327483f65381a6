//! Render-ready snapshot of a history for UI shells.

use super::history::HistoryStore;
use super::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// One selectable entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button text for the entry.
    pub label: String,
    /// Whether this entry is the active snapshot.
    pub current: bool,
}

/// Returns the move list label for history `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{index}")
    }
}

/// Everything a shell needs to draw the game, derived from a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The active snapshot.
    pub board: Board,
    /// Index of the active snapshot.
    pub current_index: usize,
    /// Number of snapshots in the history.
    pub history_len: usize,
    /// Player to move from the active snapshot.
    pub next_player: Player,
    /// Winner on the active snapshot.
    pub winner: Option<Player>,
    /// Status of the active snapshot.
    pub status: GameStatus,
    /// One entry per snapshot, oldest first.
    pub moves: Vec<MoveEntry>,
}

impl From<&HistoryStore> for GameView {
    fn from(store: &HistoryStore) -> Self {
        let current_index = store.current_index();
        Self {
            board: *store.active_board(),
            current_index,
            history_len: store.history_len(),
            next_player: store.next_player(),
            winner: store.winner(),
            status: store.status(),
            moves: (0..store.history_len())
                .map(|index| MoveEntry {
                    index,
                    label: move_label(index),
                    current: index == current_index,
                })
                .collect(),
        }
    }
}

impl HistoryStore {
    /// Builds the render-ready view of this history.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

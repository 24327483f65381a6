//! Initial board invariant: history starts from an empty board.

use super::Invariant;
use crate::{Board, HistoryStore};

/// Invariant: History is never empty and its first snapshot is empty.
pub struct InitialBoardEmptyInvariant;

impl Invariant<HistoryStore> for InitialBoardEmptyInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

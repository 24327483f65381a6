//! Cursor invariant: the active index names an existing snapshot.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: `0 <= current_index < history_len`.
pub struct CursorInBoundsInvariant;

impl Invariant<HistoryStore> for CursorInBoundsInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store.current < store.snapshots.len()
    }

    fn description() -> &'static str {
        "Current index points at an existing snapshot"
    }
}

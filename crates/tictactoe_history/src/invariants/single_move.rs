//! Single move invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{HistoryStore, Move};

/// Invariant: Adjacent snapshots differ by exactly one newly placed mark.
///
/// Marks are never removed or overwritten, so the occupied count grows by
/// one per snapshot and equals the snapshot's index.
pub struct SingleMovePerSnapshotInvariant;

impl Invariant<HistoryStore> for SingleMovePerSnapshotInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store
            .snapshots()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

//! Alternating marks invariant: X, O, X, O, ... by snapshot index.

use super::Invariant;
use crate::{HistoryStore, Player};

/// Invariant: The mark placed after snapshot `i` belongs to
/// [`Player::for_turn(i)`](Player::for_turn).
///
/// Snapshots that do not differ by a single move are left to
/// [`SingleMovePerSnapshotInvariant`](super::SingleMovePerSnapshotInvariant).
pub struct AlternatingMarksInvariant;

impl Invariant<HistoryStore> for AlternatingMarksInvariant {
    fn holds(store: &HistoryStore) -> bool {
        (1..store.history_len()).all(|index| {
            store
                .move_at(index)
                .is_none_or(|mov| mov.player == Player::for_turn(index - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

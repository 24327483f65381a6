//! Contract-based validation for playing moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::history::HistoryStore;
use super::invariants::{HistoryInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active snapshot has neither a winner nor a full board.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the active snapshot is decided.
    #[instrument(skip(store))]
    pub fn check(store: &HistoryStore) -> Result<(), MoveError> {
        if store.status().is_in_progress() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square holds a mark.
    #[instrument(skip(store))]
    pub fn check(mov: &Move, store: &HistoryStore) -> Result<(), MoveError> {
        if store.active_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition: the game is open and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(store))]
    pub fn check(mov: &Move, store: &HistoryStore) -> Result<(), MoveError> {
        GameNotOver::check(store)?;
        SquareIsEmpty::check(mov, store)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move onto the history.
///
/// Preconditions:
/// - Game is not over on the active snapshot
/// - Square must be empty
///
/// Postconditions:
/// - All history invariants hold
/// - The cursor advanced by one and sits on the last snapshot
pub struct PlayContract;

impl Contract<HistoryStore, Move> for PlayContract {
    fn pre(store: &HistoryStore, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, store)
    }

    fn post(before: &HistoryStore, after: &HistoryStore) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let advanced = after.current_index() == before.current_index() + 1;
        let at_end = after.current_index() + 1 == after.history_len();
        if advanced && at_end {
            Ok(())
        } else {
            warn!(
                before = before.current_index(),
                after = after.current_index(),
                len = after.history_len(),
                "Cursor did not land on the new snapshot"
            );
            Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor must advance onto the new last snapshot".to_string(),
            ))
        }
    }
}

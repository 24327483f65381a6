//! Board history with time travel.
//!
//! The store keeps one full board per move plus a cursor selecting the
//! active snapshot. Playing from an earlier snapshot discards everything
//! after it before appending the new board.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::rules::{check_winner, is_draw};
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, instrument, warn};

/// Error returned when selecting a snapshot that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested index is past the end of the history.
    #[display("History index {} out of range (history has {} entries)", index, len)]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Ordered board snapshots and the currently selected index.
///
/// Invariants (see [`crate::HistoryInvariants`]):
/// - there is always at least one snapshot and the first is empty
/// - adjacent snapshots differ by one newly placed mark
/// - marks alternate X, O, X, ... by snapshot index
/// - the cursor always points at an existing snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

impl HistoryStore {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Plays the next player's mark at `cell` (0-8).
    ///
    /// Illegal moves (game over, occupied square, off-board cell) leave
    /// the store untouched and are otherwise ignored.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play_move(&mut self, cell: usize) {
        if let Err(error) = self.try_play(cell) {
            debug!(%error, "Ignoring move");
        }
    }

    /// Plays the next player's mark at `cell`, reporting why it was refused.
    ///
    /// On success the history is cut after the active snapshot, the new
    /// board is appended, and the cursor moves onto it.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn try_play(&mut self, cell: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        let action = Move::new(self.next_player(), position);

        PlayContract::pre(self, &action)?;

        let board = self.active_board().with_mark(position, action.player);
        let mut snapshots = self.snapshots[..=self.current].to_vec();
        snapshots.push(board);
        let next = Self {
            current: self.current + 1,
            snapshots,
        };

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        let discarded = self.snapshots.len() - 1 - self.current;
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after the active one");
        }
        *self = next;
        debug!(mov = %action, current = self.current, "Move played");
        Ok(action)
    }

    /// Selects the snapshot at `index` as the active one.
    ///
    /// The history itself is untouched. An index past the end is refused
    /// and the cursor stays where it was.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            warn!("Refusing jump past end of history");
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        debug!("Jumped");
        Ok(())
    }

    /// Returns the active snapshot.
    pub fn active_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Returns the index of the active snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the initial empty board.
    pub fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Player to move from the active snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.current)
    }

    /// Winner on the active snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.active_board())
    }

    /// Status of the active snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.active_board();
        if let Some(player) = check_winner(board) {
            GameStatus::Won(player)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// The move that produced the snapshot at `index`.
    ///
    /// `None` for the initial board and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let after = self.snapshots.get(index)?;
        Move::between(before, after)
    }

    /// Positions still playable from the active snapshot.
    ///
    /// Empty once the active snapshot is won or drawn.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_in_progress() {
            Position::valid_moves(self.active_board())
        } else {
            Vec::new()
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

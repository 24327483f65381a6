//! Tic-tac-toe with move history and time travel.
//!
//! The crate is the pure core of a tic-tac-toe game whose every board is
//! kept, so any earlier position can be revisited and played from again.
//!
//! # Architecture
//!
//! - **Rules**: [`check_winner`], [`is_full`] and [`is_draw`] evaluate a
//!   single board
//! - **History**: [`HistoryStore`] keeps the snapshots and the active index
//! - **Contracts**: [`PlayContract`] guards moves; [`HistoryInvariants`]
//!   describe what every history must satisfy
//! - **Session**: [`Session`] adds change notification for UI shells,
//!   which render from a [`GameView`]
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameStatus, HistoryStore, Player};
//!
//! let mut store = HistoryStore::new();
//! store.play_move(4);
//! store.play_move(0);
//! assert_eq!(store.next_player(), Player::X);
//!
//! store.jump_to(1).unwrap();
//! store.play_move(8);
//! assert_eq!(store.history_len(), 3);
//! assert_eq!(store.status(), GameStatus::InProgress(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod session;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, PlayContract, SquareIsEmpty};
pub use history::{HistoryError, HistoryStore};
pub use invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, HistoryInvariants,
    InitialBoardEmptyInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleMovePerSnapshotInvariant,
};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full};
pub use session::{Listener, Session};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, MoveEntry, move_label};

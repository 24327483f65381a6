//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They know nothing about
//! history, so callers can evaluate any snapshot they hold.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

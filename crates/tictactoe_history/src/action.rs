//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: who placed a mark, and where. The history
//! store never records moves directly (it keeps whole boards), but every
//! pair of adjacent snapshots corresponds to exactly one move.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one square differs and that square
    /// went from empty to occupied.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::valid_moves(before)
            .into_iter()
            .filter(|pos| !after.is_empty(*pos));
        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }
        let untouched = before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .all(|(index, (b, a))| index == position.to_index() || b == a);
        match after.get(position) {
            Square::Occupied(player) if untouched => Some(Self::new(player, position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The active snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_recovers_single_move() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        let after = before.with_mark(Position::TopLeft, Player::O);
        assert_eq!(
            Move::between(&before, &after),
            Some(Move::new(Player::O, Position::TopLeft))
        );
    }

    #[test]
    fn test_between_rejects_two_new_marks() {
        let before = Board::new();
        let after = before
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        assert_eq!(Move::between(&before, &after), None);
    }

    #[test]
    fn test_between_rejects_overwrite() {
        let before = Board::new().with_mark(Position::Center, Player::X);
        let after = before
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::TopLeft, Player::X);
        assert_eq!(Move::between(&before, &after), None);
    }

    #[test]
    fn test_between_rejects_identical_boards() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(Move::between(&board, &board), None);
    }

    #[test]
    fn test_display() {
        let mov = Move::new(Player::X, Position::Center);
        assert_eq!(mov.to_string(), "X -> Center");
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
    }
}

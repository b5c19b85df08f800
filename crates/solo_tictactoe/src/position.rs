//! Named board positions for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board, row-major (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
pub enum Position {
    /// Top-left (position 0)
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[strum(to_string = "Center")]
    Center,
    /// Middle-right (position 5)
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_board() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_display_uses_labels() {
        assert_eq!(Position::Center.to_string(), "Center");
        assert_eq!(Position::BottomRight.to_string(), "Bottom-right");
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
    }
}

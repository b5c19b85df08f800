//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::Serialize;
use tracing::instrument;

/// Three distinct positions forming a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinPattern([Position; 3]);

impl WinPattern {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The positions in this line.
    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    /// Checks whether `player` holds all three positions.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.0.iter().all(|&pos| board.get(pos).is_held_by(player))
    }

    /// Positions of this line that `player` does not hold yet.
    pub fn missing_for(&self, board: &Board, player: Player) -> Vec<Position> {
        self.0
            .iter()
            .copied()
            .filter(|&pos| !board.get(pos).is_held_by(player))
            .collect()
    }
}

/// The 8 winning lines: rows, columns, diagonals.
pub const WIN_PATTERNS: [WinPattern; 8] = {
    use Position::*;
    [
        // Rows
        WinPattern::new(TopLeft, TopCenter, TopRight),
        WinPattern::new(MiddleLeft, Center, MiddleRight),
        WinPattern::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        WinPattern::new(TopLeft, MiddleLeft, BottomLeft),
        WinPattern::new(TopCenter, Center, BottomCenter),
        WinPattern::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        WinPattern::new(TopLeft, Center, BottomRight),
        WinPattern::new(TopRight, Center, BottomLeft),
    ]
};

/// Checks whether `player`'s squares contain a full winning line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|pattern| pattern.is_held_by(board, player))
}

/// Returns the player with three in a row, if any.
///
/// The human is checked first. A legal game can never produce two winners.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_won(board, player))
}

//! Game result derived from the board.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal or non-terminal status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves are still being accepted.
    #[default]
    Ongoing,
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Derives the result from a board. Wins are checked before the draw.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Self {
        match check_winner(board) {
            Some(player) => Self::won_by(player),
            None if is_full(board) => Self::Draw,
            None => Self::Ongoing,
        }
    }

    /// Result for a win by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => Self::HumanWin,
            Player::Computer => Self::ComputerWin,
        }
    }

    /// Returns true once no more moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ongoing => write!(f, "In progress"),
            Self::HumanWin => write!(f, "Human wins"),
            Self::ComputerWin => write!(f, "Computer wins"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

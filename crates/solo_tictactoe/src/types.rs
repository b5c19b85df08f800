//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Participant in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The person at the keyboard (plays X).
    Human,
    /// The rule-based opponent (plays O).
    Computer,
}

impl Player {
    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by the human.
    Human,
    /// Occupied by the computer.
    Computer,
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Human => Some(Player::Human),
            Square::Computer => Some(Player::Computer),
        }
    }

    /// Checks whether the square is held by `player`.
    pub fn is_held_by(self, player: Player) -> bool {
        self.occupant() == Some(player)
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Square::Human,
            Player::Computer => Square::Computer,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board by placing each move in order.
    ///
    /// Fails on the first move that targets an occupied square.
    #[instrument(skip(moves))]
    pub fn with_moves(moves: impl IntoIterator<Item = Move>) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for mv in moves {
            board.place(mv)?;
        }
        Ok(board)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Positions currently held by `player`, in board order.
    pub fn positions_of(&self, player: Player) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.get(pos).is_held_by(player))
            .collect()
    }

    /// Positions nobody has played yet, in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Records a move. Squares are written once and never overwritten.
    pub(crate) fn place(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.is_empty(mv.position) {
            return Err(MoveError::SquareOccupied(mv.position));
        }
        self.squares[mv.position.to_index()] = mv.player.into();
        Ok(())
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos].occupant() {
                    Some(player) => player.mark(),
                    None => char::from(b'1' + pos as u8),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

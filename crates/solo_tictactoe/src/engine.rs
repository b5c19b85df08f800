//! Game engine: board ownership, move application and terminal evaluation.

use super::action::{Move, MoveError};
use super::invariants;
use super::outcome::GameResult;
use super::rules::{has_won, is_draw};
use super::strategy::{Randomness, Tactic, choose_move};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The square the computer took and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMove {
    /// Square the computer occupied.
    pub position: Position,
    /// Heuristic rule that picked it.
    pub tactic: Tactic,
}

/// Tic-tac-toe engine for one human against the computer.
///
/// Callers serialize access; the engine does no locking of its own.
/// Deserializing replays the saved history and rejects a board or result
/// that disagrees with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameEngine {
    board: Board,
    history: Vec<Move>,
    result: GameResult,
}

/// Wire form of a [`GameEngine`], checked before it becomes one.
#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    history: Vec<Move>,
    result: GameResult,
}

impl TryFrom<SavedGame> for GameEngine {
    type Error = MoveError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let engine = Self::replay(&saved.history)?;
        if engine.board != saved.board || engine.result != saved.result {
            return Err(MoveError::HistoryMismatch);
        }
        Ok(engine)
    }
}

impl GameEngine {
    /// Creates an engine with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `moves` in order onto an empty board.
    ///
    /// Terminal evaluation runs after every move, so a replay that continues
    /// past a finished game fails with [`MoveError::GameOver`].
    #[instrument(skip(moves))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &mv in moves {
            engine.record(mv)?;
        }
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves recorded so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Records a human move at `position`.
    ///
    /// Occupied squares and finished games are ignored: the board is left
    /// untouched and the current result is returned.
    #[instrument(skip(self), fields(result = ?self.result))]
    pub fn apply_human_move(&mut self, position: Position) -> GameResult {
        match self.record(Move::new(Player::Human, position)) {
            Ok(result) => result,
            Err(error) => {
                debug!(%error, "Ignoring human move");
                self.result
            }
        }
    }

    /// Picks and records the computer's reply.
    ///
    /// A full board fails with [`MoveError::NoLegalMove`]; any other finished
    /// game fails with [`MoveError::GameOver`].
    #[instrument(skip(self, rng), fields(result = ?self.result))]
    pub fn compute_computer_move<R: Randomness + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ComputerMove, MoveError> {
        if self.board.is_full() {
            return Err(MoveError::NoLegalMove);
        }
        if self.result.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let (position, tactic) = choose_move(&self.board, rng).ok_or(MoveError::NoLegalMove)?;
        self.record(Move::new(Player::Computer, position))?;
        info!(%position, %tactic, "Computer moved");
        Ok(ComputerMove { position, tactic })
    }

    /// Checks whether `player` holds a complete line.
    pub fn check_win_condition(&self, player: Player) -> bool {
        has_won(&self.board, player)
    }

    /// Checks for a full board with no completed line.
    pub fn check_draw_condition(&self) -> bool {
        is_draw(&self.board)
    }

    /// Clears the board, history and result.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Places a move and runs terminal evaluation for its player.
    fn record(&mut self, mv: Move) -> Result<GameResult, MoveError> {
        if self.result.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board.place(mv)?;
        self.history.push(mv);
        self.result = self.evaluate_after(mv.player);
        invariants::debug_check(self);

        if self.result.is_terminal() {
            info!(result = %self.result, moves = self.history.len(), "Game finished");
        }
        Ok(self.result)
    }

    /// Win for the mover is checked before anything else.
    fn evaluate_after(&self, mover: Player) -> GameResult {
        if self.check_win_condition(mover) {
            GameResult::won_by(mover)
        } else {
            GameResult::evaluate(&self.board)
        }
    }
}

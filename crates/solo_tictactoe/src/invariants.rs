//! Logical properties that hold after every recorded move.
//!
//! The engine checks them in debug builds; they are also testable on their
//! own against hand-built states.

use super::engine::GameEngine;
use super::rules::has_won;
use super::{Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// History and board describe the same set of moves.
pub struct HistoryConsistent;

impl Invariant<GameEngine> for HistoryConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let filled = board.occupied_count();
        let history = engine.history();

        if filled != history.len() {
            warn!(filled, history_len = history.len(), "History length mismatch");
            return false;
        }

        history
            .iter()
            .all(|mv| board.get(mv.position) == Square::from(mv.player))
    }

    fn description() -> &'static str {
        "Every occupied square has exactly one matching move in history"
    }
}

/// At most one player can hold a completed line.
pub struct SingleWinner;

impl Invariant<GameEngine> for SingleWinner {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        !(has_won(board, Player::Human) && has_won(board, Player::Computer))
    }

    fn description() -> &'static str {
        "Both players cannot have three in a row"
    }
}

/// Asserts the engine invariants in debug builds.
pub(crate) fn debug_check(engine: &GameEngine) {
    debug_assert!(
        HistoryConsistent::holds(engine),
        "{}",
        HistoryConsistent::description()
    );
    debug_assert!(SingleWinner::holds(engine), "{}", SingleWinner::description());
}

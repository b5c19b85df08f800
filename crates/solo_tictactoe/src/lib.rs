//! Solo tic-tac-toe - game logic for one human against a rule-based computer.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`], [`Move`]
//! - **Rules**: win-pattern table, win and draw detection
//! - **Strategy**: the computer's priority heuristic (win, block, center, random)
//! - **Engine**: [`GameEngine`] owns the board and evaluates results after each move
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use solo_tictactoe::{GameEngine, GameResult, Position};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut engine = GameEngine::new();
//!
//! assert_eq!(engine.apply_human_move(Position::Center), GameResult::Ongoing);
//! let reply = engine.compute_computer_move(&mut rng).unwrap();
//! assert_ne!(reply.position, Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod alerts;
mod engine;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use alerts::AlertItem;
pub use engine::{ComputerMove, GameEngine};
pub use invariants::{HistoryConsistent, Invariant, SingleWinner};
pub use outcome::GameResult;
pub use position::Position;
pub use rules::{WIN_PATTERNS, WinPattern};
pub use strategy::{Randomness, Tactic, choose_move, completing_square};
pub use types::{Board, Player, Square};

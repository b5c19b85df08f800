//! Headless games: a random stand-in for the human against the heuristic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use solo_tictactoe::{GameEngine, GameResult, MoveError};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games the stand-in won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::HumanWin => self.human_wins += 1,
            GameResult::ComputerWin => self.computer_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "human wins: {}, computer wins: {}, draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}

/// Plays `games` games and tallies the results.
#[instrument]
pub fn run(games: u32, seed: Option<u64>) -> Result<Tally, MoveError> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut tally = Tally::default();
    for game in 0..games {
        let result = play_one(&mut rng)?;
        debug!(game, %result, "Game finished");
        tally.record(result);
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}

fn play_one(rng: &mut ChaCha8Rng) -> Result<GameResult, MoveError> {
    let mut engine = GameEngine::new();
    loop {
        let empty = engine.board().empty_positions();
        let choice = empty[rng.gen_range(0..empty.len())];
        if engine.apply_human_move(choice).is_terminal() {
            return Ok(engine.result());
        }
        engine.compute_computer_move(rng)?;
        if engine.result().is_terminal() {
            return Ok(engine.result());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_counted() {
        let tally = run(50, Some(11)).unwrap();
        assert_eq!(tally.human_wins + tally.computer_wins + tally.draws, 50);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        assert_eq!(run(20, Some(3)).unwrap(), run(20, Some(3)).unwrap());
    }
}

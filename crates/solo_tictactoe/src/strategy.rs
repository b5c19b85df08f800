//! Move selection for the computer player.
//!
//! The opponent follows a fixed priority list and takes the first rule that
//! produces a square:
//!
//! 1. [`Tactic::WinNow`] completes one of its own lines.
//! 2. [`Tactic::Block`] fills the last gap in one of the human's lines.
//! 3. [`Tactic::Center`] takes the center on a coin flip.
//! 4. [`Tactic::Random`] picks uniformly among the empty squares.
//!
//! The two random rules draw from a [`Randomness`] source so callers can
//! seed or script them.

use super::rules::WIN_PATTERNS;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Source of the coin flips and uniform picks used by the heuristic.
///
/// Every [`rand::Rng`] is a `Randomness`; tests can plug in a scripted fake.
pub trait Randomness {
    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> Randomness for R {
    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Which rule of the heuristic chose a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tactic {
    /// Completes a computer line.
    #[strum(to_string = "win")]
    WinNow,
    /// Denies the human a completed line.
    #[strum(to_string = "block")]
    Block,
    /// Took the free center on a coin flip.
    #[strum(to_string = "center")]
    Center,
    /// Uniform pick among empty squares.
    #[strum(to_string = "random")]
    Random,
}

/// Finds an empty square that would give `player` three in a row.
///
/// Patterns are scanned in catalog order; the first hit wins.
#[instrument(skip(board))]
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        match pattern.missing_for(board, player).as_slice() {
            [gap] if board.is_empty(*gap) => Some(*gap),
            _ => None,
        }
    })
}

/// Chooses the computer's next square. Returns `None` on a full board.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Randomness + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Option<(Position, Tactic)> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        debug!("No empty squares left");
        return None;
    }

    if let Some(pos) = completing_square(board, Player::Computer) {
        debug!(position = %pos, "Completing own line");
        return Some((pos, Tactic::WinNow));
    }

    if let Some(pos) = completing_square(board, Player::Human) {
        debug!(position = %pos, "Blocking human line");
        return Some((pos, Tactic::Block));
    }

    if board.is_empty(Position::Center) && rng.coin_flip() {
        debug!("Taking the center");
        return Some((Position::Center, Tactic::Center));
    }

    let pos = empty[rng.pick(empty.len())];
    debug!(position = %pos, candidates = empty.len(), "Random fallback");
    Some((pos, Tactic::Random))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Scripted randomness: fixed coin and always the first candidate.
    struct Scripted {
        coin: bool,
        flips: usize,
    }

    impl Scripted {
        fn heads() -> Self {
            Self { coin: true, flips: 0 }
        }

        fn tails() -> Self {
            Self { coin: false, flips: 0 }
        }
    }

    impl Randomness for Scripted {
        fn coin_flip(&mut self) -> bool {
            self.flips += 1;
            self.coin
        }

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn board_of(moves: &[(Player, usize)]) -> Board {
        Board::with_moves(
            moves
                .iter()
                .map(|&(p, i)| Move::new(p, Position::from_index(i).unwrap())),
        )
        .unwrap()
    }

    #[test]
    fn test_win_now_takes_gap() {
        let board = board_of(&[(Player::Computer, 0), (Player::Computer, 1)]);
        let choice = choose_move(&board, &mut Scripted::heads());
        assert_eq!(choice, Some((Position::TopRight, Tactic::WinNow)));
    }

    #[test]
    fn test_block_takes_gap() {
        let board = board_of(&[(Player::Human, 0), (Player::Human, 1)]);
        let choice = choose_move(&board, &mut Scripted::heads());
        assert_eq!(choice, Some((Position::TopRight, Tactic::Block)));
    }

    #[test]
    fn test_win_outranks_block() {
        let board = board_of(&[
            (Player::Human, 0),
            (Player::Human, 1),
            (Player::Computer, 3),
            (Player::Computer, 4),
        ]);
        let choice = choose_move(&board, &mut Scripted::heads());
        assert_eq!(choice, Some((Position::MiddleRight, Tactic::WinNow)));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        // Human on 0 and 1 but the computer already holds 2.
        let board = board_of(&[
            (Player::Human, 0),
            (Player::Human, 1),
            (Player::Computer, 2),
        ]);
        assert_eq!(completing_square(&board, Player::Human), None);
    }

    #[test]
    fn test_center_on_heads() {
        let board = board_of(&[(Player::Human, 0)]);
        let mut rng = Scripted::heads();
        assert_eq!(
            choose_move(&board, &mut rng),
            Some((Position::Center, Tactic::Center))
        );
        assert_eq!(rng.flips, 1);
    }

    #[test]
    fn test_random_on_tails() {
        let board = board_of(&[(Player::Human, 0)]);
        let mut rng = Scripted::tails();
        assert_eq!(
            choose_move(&board, &mut rng),
            Some((Position::TopCenter, Tactic::Random))
        );
    }

    #[test]
    fn test_no_coin_flip_when_center_taken() {
        let board = board_of(&[(Player::Human, 4)]);
        let mut rng = Scripted::heads();
        let (pos, tactic) = choose_move(&board, &mut rng).unwrap();
        assert_eq!(tactic, Tactic::Random);
        assert_eq!(pos, Position::TopLeft);
        assert_eq!(rng.flips, 0);
    }

    #[test]
    fn test_full_board_has_no_move() {
        use Player::{Computer as O, Human as X};
        let marks = [X, O, X, O, X, X, O, X, O];
        let board = board_of(
            &marks
                .iter()
                .enumerate()
                .map(|(i, &p)| (p, i))
                .collect::<Vec<_>>(),
        );
        assert_eq!(choose_move(&board, &mut Scripted::heads()), None);
    }

    #[test]
    fn test_seeded_choices_always_land_on_empty_squares() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let board = board_of(&[(Player::Human, 0), (Player::Computer, 8)]);
            let (pos, _) = choose_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }
}

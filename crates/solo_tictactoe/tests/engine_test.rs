//! Behavioural tests for the game engine and the computer heuristic.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use solo_tictactoe::{
    Board, GameEngine, GameResult, Move, MoveError, Player, Position, Randomness, Tactic,
};

/// Scripted randomness for forcing the probabilistic branches.
struct Coin(bool);

impl Randomness for Coin {
    fn coin_flip(&mut self) -> bool {
        self.0
    }

    fn pick(&mut self, len: usize) -> usize {
        len - 1
    }
}

fn engine_with(moves: &[(Player, usize)]) -> GameEngine {
    let moves: Vec<_> = moves
        .iter()
        .map(|&(p, i)| Move::new(p, Position::from_index(i).expect("index in range")))
        .collect();
    GameEngine::replay(&moves).expect("legal replay")
}

#[test]
fn test_win_now_priority() {
    let mut engine = engine_with(&[(Player::Computer, 0), (Player::Computer, 1)]);
    let reply = engine.compute_computer_move(&mut Coin(true)).unwrap();
    assert_eq!(reply.position, Position::TopRight);
    assert_eq!(reply.tactic, Tactic::WinNow);
    assert_eq!(engine.result(), GameResult::ComputerWin);
    assert!(engine.check_win_condition(Player::Computer));
}

#[test]
fn test_block_priority() {
    let mut engine = engine_with(&[(Player::Human, 0), (Player::Human, 1)]);
    let reply = engine.compute_computer_move(&mut Coin(true)).unwrap();
    assert_eq!(reply.position, Position::TopRight);
    assert_eq!(reply.tactic, Tactic::Block);
    assert_eq!(engine.result(), GameResult::Ongoing);
}

#[test]
fn test_single_empty_square_is_chosen() {
    // X O X / X O O / O X _ : no line for anyone through 8.
    let mut engine = engine_with(&[
        (Player::Human, 0),
        (Player::Computer, 1),
        (Player::Human, 2),
        (Player::Human, 3),
        (Player::Computer, 4),
        (Player::Computer, 5),
        (Player::Computer, 6),
        (Player::Human, 7),
    ]);
    assert_eq!(engine.result(), GameResult::Ongoing);

    let reply = engine.compute_computer_move(&mut Coin(false)).unwrap();
    assert_eq!(reply.position, Position::BottomRight);
    assert_eq!(reply.tactic, Tactic::Random);
    assert_eq!(engine.result(), GameResult::Draw);
    assert_eq!(
        engine.compute_computer_move(&mut Coin(false)),
        Err(MoveError::NoLegalMove)
    );
}

#[test]
fn test_computer_always_takes_an_empty_square() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..100 {
        let mut engine = GameEngine::new();
        while !engine.result().is_terminal() {
            let empty = engine.board().empty_positions();
            let human = empty[empty.len() / 2];
            if engine.apply_human_move(human).is_terminal() {
                break;
            }
            let before = engine.board().clone();
            let reply = engine.compute_computer_move(&mut rng).unwrap();
            assert!(before.is_empty(reply.position));
            assert_eq!(engine.board().occupied_count(), before.occupied_count() + 1);
        }
    }
}

#[test]
fn test_end_to_end_human_win() {
    let mut engine = GameEngine::new();

    assert_eq!(engine.apply_human_move(Position::TopLeft), GameResult::Ongoing);
    let reply = engine.compute_computer_move(&mut Coin(true)).unwrap();
    assert_eq!(reply.position, Position::Center);

    assert_eq!(engine.apply_human_move(Position::TopCenter), GameResult::Ongoing);
    assert_eq!(engine.apply_human_move(Position::TopRight), GameResult::HumanWin);
    assert!(engine.check_win_condition(Player::Human));

    let finished = engine.clone();
    assert_eq!(engine.apply_human_move(Position::BottomLeft), GameResult::HumanWin);
    assert_eq!(
        engine.compute_computer_move(&mut Coin(true)),
        Err(MoveError::GameOver)
    );
    assert_eq!(engine, finished);
}

#[test]
fn test_reset_twice_equals_once() {
    let mut engine = engine_with(&[(Player::Human, 4), (Player::Computer, 0)]);
    engine.reset_game();
    let once = engine.clone();
    engine.reset_game();
    assert_eq!(engine, once);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.result(), GameResult::Ongoing);
    assert!(engine.history().is_empty());
}

/// Every assignment of {empty, human, computer} to the nine squares, as
/// moves in board order.
fn all_move_sets() -> impl Iterator<Item = Vec<Move>> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut moves = Vec::new();
        for pos in Position::ALL {
            match code % 3 {
                1 => moves.push(Move::new(Player::Human, pos)),
                2 => moves.push(Move::new(Player::Computer, pos)),
                _ => {}
            }
            code /= 3;
        }
        moves
    })
}

fn all_boards() -> impl Iterator<Item = Board> {
    all_move_sets().map(|moves| Board::with_moves(moves).expect("distinct squares"))
}

#[test]
fn test_engine_result_matches_board_evaluation() {
    let mut replayed = 0;
    for moves in all_move_sets() {
        // Sets that keep playing past a finished game are not reachable.
        let Ok(engine) = GameEngine::replay(&moves) else {
            continue;
        };
        replayed += 1;
        assert_eq!(engine.result(), GameResult::evaluate(engine.board()));
    }
    assert!(replayed > 0);
}

#[test]
fn test_win_condition_matches_pattern_containment() {
    let lines = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for board in all_boards() {
        for player in [Player::Human, Player::Computer] {
            let held: Vec<usize> = board
                .positions_of(player)
                .iter()
                .map(|p| p.to_index())
                .collect();
            let expected = lines.iter().any(|l| l.iter().all(|i| held.contains(i)));
            assert_eq!(solo_tictactoe::rules::has_won(&board, player), expected);
        }
    }
}

#[test]
fn test_draw_condition_is_full_without_winner() {
    for board in all_boards() {
        let expected = board.is_full()
            && !solo_tictactoe::rules::has_won(&board, Player::Human)
            && !solo_tictactoe::rules::has_won(&board, Player::Computer);
        assert_eq!(solo_tictactoe::rules::is_draw(&board), expected);
    }
}

#[test]
fn test_occupied_square_never_changes_board() {
    let mut engine = engine_with(&[(Player::Human, 0), (Player::Computer, 4)]);
    for pos in [Position::TopLeft, Position::Center] {
        let before = engine.board().clone();
        engine.apply_human_move(pos);
        assert_eq!(engine.board(), &before);
    }
}

#[test]
fn test_snapshot_serializes() {
    let engine = engine_with(&[(Player::Human, 4)]);
    let json = serde_json::to_value(&engine).unwrap();
    assert_eq!(json["result"], "Ongoing");
    assert_eq!(json["board"]["squares"][4], "Human");
}

//! Engine-level tests for tic-tac-toe.

use grid_games::{Board, Difficulty, GameStatus, Mark, TicTacToeGame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Plays one full game with uniformly random player moves.
/// Returns the terminal status.
fn random_playout(game: &mut TicTacToeGame, rng: &mut StdRng) -> GameStatus {
    while game.status() == GameStatus::Ongoing {
        let empty = game.board().empty_cells();
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        game.play(row, col, rng);
    }
    game.status()
}

#[test]
fn test_hard_ai_never_loses() {
    let mut game = TicTacToeGame::new();
    game.set_options(Mark::X, Difficulty::Hard);
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let status = random_playout(&mut game, &mut rng);
        assert_ne!(status, GameStatus::Win, "player beat minimax (seed {seed})");
        game.reset();
    }
    assert_eq!(game.player_score(), 0);
}

#[test]
fn test_scores_track_outcomes() {
    let mut game = TicTacToeGame::new();
    game.set_options(Mark::O, Difficulty::Easy);
    let mut wins = 0;
    let mut losses = 0;
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        match random_playout(&mut game, &mut rng) {
            GameStatus::Win => wins += 1,
            GameStatus::Lose => losses += 1,
            GameStatus::Draw => {}
            GameStatus::Ongoing => unreachable!(),
        }
        game.reset();
    }
    assert_eq!(game.player_score(), wins);
    assert_eq!(game.ai_score(), losses);
}

#[test]
fn test_occupied_cell_leaves_board_unchanged() {
    let mut game = TicTacToeGame::new();
    let mut rng = StdRng::seed_from_u64(1);
    game.play(0, 0, &mut rng);
    let before = game.board().clone();
    let score_before = (game.player_score(), game.ai_score());
    // (0, 0) holds the player's mark; the AI reply occupies one more cell.
    game.play(0, 0, &mut rng);
    assert_eq!(game.board(), &before);
    assert_eq!((game.player_score(), game.ai_score()), score_before);
}

#[test]
fn test_player_never_ahead_by_more_than_one_mark() {
    let mut game = TicTacToeGame::new();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..5 {
        if game.status() != GameStatus::Ongoing {
            break;
        }
        let empty = game.board().empty_cells();
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        game.play(row, col, &mut rng);
        let mut player_marks = 0;
        let mut ai_marks = 0;
        for r in 0..3 {
            for c in 0..3 {
                match game.board().get(r, c).flatten() {
                    Some(m) if m == Mark::X => player_marks += 1,
                    Some(_) => ai_marks += 1,
                    None => {}
                }
            }
        }
        assert!(player_marks - ai_marks <= 1);
    }
}

#[test]
fn test_reset_clears_board_only() {
    let mut game = TicTacToeGame::new();
    let mut rng = StdRng::seed_from_u64(2);
    game.play(1, 1, &mut rng);
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.status(), GameStatus::Ongoing);
}

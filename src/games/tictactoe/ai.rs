//! AI move selection: exhaustive minimax on hard, a shallow heuristic on easy.

use super::types::{Board, Difficulty, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Board evaluation from the AI's perspective.
const AI_WIN: i32 = 10;
const PLAYER_WIN: i32 = -10;

/// Selects the AI's reply, or `None` on a full board.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    ai: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let chosen = match difficulty {
        Difficulty::Hard => best_move(board, ai),
        Difficulty::Easy => easy_move(board, ai, rng),
    };
    debug!(?chosen, ?difficulty, "AI selected move");
    chosen
}

fn evaluate(board: &Board, ai: Mark) -> i32 {
    match board.winner() {
        Some(winner) if winner == ai => AI_WIN,
        Some(_) => PLAYER_WIN,
        None => 0,
    }
}

/// Full-depth minimax over the remaining cells. The state space is at most
/// 9! positions, so no pruning or depth limit is needed.
fn minimax(board: &mut Board, ai: Mark, maximizing: bool) -> i32 {
    let score = evaluate(board, ai);
    if score != 0 {
        return score;
    }
    if board.is_full() {
        return 0;
    }

    let mark = if maximizing { ai } else { ai.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for (row, col) in board.empty_cells() {
        board.set(row, col, Some(mark));
        let score = minimax(board, ai, !maximizing);
        board.set(row, col, None);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Optimal move with deterministic tie-breaking: the root scan is row-major
/// and only a strictly better score displaces the incumbent, so the first
/// optimal cell found wins.
fn best_move(board: &Board, ai: Mark) -> Option<(usize, usize)> {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best = None;
    for (row, col) in board.empty_cells() {
        scratch.set(row, col, Some(ai));
        let score = minimax(&mut scratch, ai, false);
        scratch.set(row, col, None);
        if score > best_score {
            best_score = score;
            best = Some((row, col));
        }
    }
    best
}

/// Takes an immediate win if one exists, blocks an immediate player win
/// otherwise, and falls back to a uniformly random empty cell.
fn easy_move<R: Rng>(board: &Board, ai: Mark, rng: &mut R) -> Option<(usize, usize)> {
    if let Some(cell) = completing_cell(board, ai) {
        return Some(cell);
    }
    if let Some(cell) = completing_cell(board, ai.opponent()) {
        return Some(cell);
    }
    board.empty_cells().choose(rng).copied()
}

/// First empty cell (row-major) that would complete a line for `mark`.
fn completing_cell(board: &Board, mark: Mark) -> Option<(usize, usize)> {
    let mut scratch = board.clone();
    for (row, col) in board.empty_cells() {
        scratch.set(row, col, Some(mark));
        let wins = scratch.winner() == Some(mark);
        scratch.set(row, col, None);
        if wins {
            return Some((row, col));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(rows: [[&str; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                board.set(r, c, Mark::from_symbol(cell));
            }
        }
        board
    }

    #[test]
    fn test_minimax_takes_winning_cell() {
        // O to move, O O _ on the top row.
        let board = board_from([["O", "O", ""], ["X", "X", ""], ["", "", ""]]);
        assert_eq!(best_move(&board, Mark::O), Some((0, 2)));
    }

    #[test]
    fn test_minimax_blocks_player_win() {
        let board = board_from([["X", "X", ""], ["", "O", ""], ["", "", ""]]);
        assert_eq!(best_move(&board, Mark::O), Some((0, 2)));
    }

    #[test]
    fn test_minimax_prefers_win_over_block() {
        // Both sides threaten a line; the AI must finish its own.
        let board = board_from([["X", "X", ""], ["O", "O", ""], ["", "", ""]]);
        assert_eq!(best_move(&board, Mark::O), Some((1, 2)));
    }

    #[test]
    fn test_minimax_tie_breaks_row_major() {
        // On an empty board every reply draws; the first scanned cell wins.
        assert_eq!(best_move(&Board::new(), Mark::O), Some((0, 0)));
    }

    #[test]
    fn test_best_move_none_on_full_board() {
        let board = board_from([
            ["X", "O", "X"],
            ["X", "O", "O"],
            ["O", "X", "X"],
        ]);
        assert_eq!(best_move(&board, Mark::O), None);
    }

    #[test]
    fn test_easy_takes_immediate_win() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = board_from([["O", "O", ""], ["X", "X", ""], ["", "", ""]]);
        assert_eq!(easy_move(&board, Mark::O, &mut rng), Some((0, 2)));
    }

    #[test]
    fn test_easy_blocks_immediate_loss() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = board_from([["X", "X", ""], ["O", "", ""], ["", "", ""]]);
        assert_eq!(easy_move(&board, Mark::O, &mut rng), Some((0, 2)));
    }

    #[test]
    fn test_easy_returns_some_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = board_from([["X", "", ""], ["", "", ""], ["", "", ""]]);
        let cell = easy_move(&board, Mark::O, &mut rng).unwrap();
        assert!(board.is_empty(cell.0, cell.1));
    }
}

//! Game engine and rules for tic-tac-toe.

use super::ai;
use super::types::{Board, Difficulty, GameStatus, Mark};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the mark assignment, the difficulty setting, and the
/// cumulative score counters. Invalid moves (occupied cell, out-of-bounds
/// coordinates, concluded game) are benign no-ops that leave every field
/// unchanged.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player_mark: Mark,
    ai_mark: Mark,
    difficulty: Difficulty,
    status: GameStatus,
    player_score: u32,
    ai_score: u32,
}

impl Game {
    /// Creates a new game: player is X, hard difficulty, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player_mark: Mark::X,
            ai_mark: Mark::O,
            difficulty: Difficulty::Hard,
            status: GameStatus::Ongoing,
            player_score: 0,
            ai_score: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player's cumulative score.
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Returns the AI's cumulative score.
    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }

    /// Returns the player's mark.
    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Reassigns marks and difficulty, clearing the board.
    ///
    /// The AI always takes the mark the player did not choose. Scores
    /// persist, as with [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn set_options(&mut self, player_mark: Mark, difficulty: Difficulty) {
        info!(?player_mark, ?difficulty, "Reconfiguring game");
        self.player_mark = player_mark;
        self.ai_mark = player_mark.opponent();
        self.difficulty = difficulty;
        self.reset();
    }

    /// Clears the board and status. Scores are cumulative across games and
    /// survive resets; they only vanish with the process.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Clearing board");
        self.board = Board::new();
        self.status = GameStatus::Ongoing;
    }

    /// Applies a player move, then the AI's reply if the game continues.
    ///
    /// No-op if the game is already concluded, the coordinates fall outside
    /// the board, or the cell is occupied. At most one player cell and one
    /// AI cell change per call.
    #[instrument(skip(self, rng))]
    pub fn play<R: Rng>(&mut self, row: usize, col: usize, rng: &mut R) {
        if self.status != GameStatus::Ongoing {
            debug!(status = ?self.status, "Move ignored, game already concluded");
            return;
        }
        if !self.board.is_empty(row, col) {
            debug!(row, col, "Move ignored, cell occupied or out of bounds");
            return;
        }

        self.board.set(row, col, Some(self.player_mark));
        if self.conclude() {
            return;
        }

        if let Some((ai_row, ai_col)) = ai::choose_move(&self.board, self.ai_mark, self.difficulty, rng)
        {
            self.board.set(ai_row, ai_col, Some(self.ai_mark));
        }
        self.conclude();
    }

    /// Evaluates the terminal state, updating status and scores.
    /// Returns true if the game just ended.
    fn conclude(&mut self) -> bool {
        if let Some(winner) = self.board.winner() {
            if winner == self.player_mark {
                self.status = GameStatus::Win;
                self.player_score += 1;
            } else {
                self.status = GameStatus::Lose;
                self.ai_score += 1;
            }
            info!(?winner, status = ?self.status, "Game concluded with a winner");
            true
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("Game concluded in a draw");
            true
        } else {
            false
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

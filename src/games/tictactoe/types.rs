//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a one-character symbol, rejecting anything outside {X, O}.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }
}

/// AI move quality.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Shallow heuristic: win or block if immediate, otherwise random.
    Easy,
    /// Exhaustive minimax.
    Hard,
}

/// Current status of the game, from the human player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game is ongoing.
    Ongoing,
    /// The player won.
    Win,
    /// The AI won.
    Lose,
    /// Full board, no winner.
    Draw,
}

/// 3x3 board. Serializes as a bare 3x3 array whose cells are `null` or a
/// one-character mark string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Mark>; 3]; 3],
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub(crate) const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; 3]; 3],
        }
    }

    /// Gets the cell at the given coordinates, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Option<Mark>> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets a cell. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, mark: Option<Mark>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = mark;
        }
    }

    /// Checks whether a cell is in bounds and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col].is_none() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Checks for a completed line.
    pub fn winner(&self) -> Option<Mark> {
        for line in LINES {
            let [a, b, c] = line.map(|(r, cl)| self.cells[r][cl]);
            if a.is_some() && a == b && b == c {
                return a;
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

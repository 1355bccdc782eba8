//! Tic-tac-toe: board types, rules, and AI move selection.

mod ai;
mod rules;
mod types;

pub use rules::Game;
pub use types::{Board, Difficulty, GameStatus, Mark};

//! Game engine implementations.

pub mod tictactoe;
pub mod wumpus;

//! Wumpus World: grid types and the simulation engine.

mod engine;
mod types;

pub use engine::{Game, GameView};
pub use types::{Coord, Direction, GRID_SIZE};

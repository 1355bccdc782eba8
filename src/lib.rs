//! Grid Games - authoritative game engines behind a JSON REST API
//!
//! This library hosts two independent game engines behind a small HTTP
//! surface, with all rules, AI, and win/loss evaluation resolved
//! server-side.
//!
//! # Architecture
//!
//! - **Server**: axum router with one engine instance of each game,
//!   mutated synchronously per request
//! - **Tic-tac-toe**: 3x3 board with minimax AI on hard difficulty and
//!   cumulative score counters
//! - **Wumpus World**: 8x8 grid with a hidden wumpus, pits, gold,
//!   adjacency sensing, and a straight-line arrow shot
//!
//! # Example
//!
//! ```no_run
//! use grid_games::server;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app = server::router();
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod games;

// Public server surface
pub mod server;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Game engines
pub use games::tictactoe::{
    Board, Difficulty, Game as TicTacToeGame, GameStatus, Mark,
};
pub use games::wumpus::{
    Coord, Direction, GRID_SIZE, Game as WumpusGame, GameView as WumpusView,
};

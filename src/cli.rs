//! Command-line interface for the game server.

use clap::Parser;

/// Grid Games - tic-tac-toe and Wumpus World over a JSON REST API
#[derive(Parser, Debug)]
#[command(name = "grid_games")]
#[command(about = "Authoritative game-state server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}

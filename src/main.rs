//! Grid Games server entry point.

use anyhow::Result;
use clap::Parser;
use grid_games::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(host = %cli.host, port = cli.port, "Starting Grid Games server");

    let app = grid_games::server::router();
    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("Server ready at http://{}:{}/", cli.host, cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP server: shared engine state, JSON handlers, and the API error type.

use crate::games::{tictactoe, wumpus};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Shared server state: one engine instance of each game per process.
///
/// Every handler locks the engine it touches for the full mutation, so
/// requests against one engine resolve strictly one at a time. The two
/// engines are independent and never share state.
#[derive(Clone)]
pub struct AppState {
    tictactoe: Arc<Mutex<tictactoe::Game>>,
    wumpus: Arc<Mutex<wumpus::Game>>,
}

impl AppState {
    /// Creates fresh engines with randomized wumpus layout.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating engine state");
        Self {
            tictactoe: Arc::new(Mutex::new(tictactoe::Game::new())),
            wumpus: Arc::new(Mutex::new(wumpus::Game::new(&mut rand::thread_rng()))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Client errors surfaced as `400 {"error": ...}` responses.
///
/// Game-rule violations (occupied cell, shooting without arrows, moving
/// after death) are not errors: they return the unchanged state with 200.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ApiError {
    /// Unrecognized player symbol or difficulty.
    #[display("invalid option: {_0}")]
    InvalidOption(#[error(not(source))] String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejecting request");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Request body for `POST /move`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    /// `[row, col]` of the player's move.
    #[serde(rename = "move")]
    pub cell: [usize; 2],
}

/// Request body for `POST /set_options`.
#[derive(Debug, Deserialize)]
pub struct SetOptionsRequest {
    /// One-character mark, `"X"` or `"O"`.
    pub player_symbol: String,
    /// `"easy"` or `"hard"`.
    pub difficulty: String,
}

/// Request body for `POST /wumpus/move` and `POST /wumpus/shoot`.
#[derive(Debug, Deserialize)]
pub struct DirectionRequest {
    /// Direction of the move or shot.
    pub direction: wumpus::Direction,
}

/// Tic-tac-toe state as seen by the client.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Game status from the player's perspective.
    pub status: tictactoe::GameStatus,
    /// 3x3 grid of `null` or one-character mark strings.
    pub board: tictactoe::Board,
    /// Cumulative player wins.
    pub player_score: u32,
    /// Cumulative AI wins.
    pub ai_score: u32,
}

impl BoardResponse {
    fn from_game(game: &tictactoe::Game) -> Self {
        Self {
            status: game.status(),
            board: game.board().clone(),
            player_score: game.player_score(),
            ai_score: game.ai_score(),
        }
    }
}

/// Wumpus state envelope for `POST /wumpus/start` and `POST /wumpus/move`.
#[derive(Debug, Serialize)]
pub struct WumpusResponse {
    /// Current game snapshot.
    pub game: wumpus::GameView,
}

/// Response for `POST /wumpus/shoot`.
#[derive(Debug, Serialize)]
pub struct ShootResponse {
    /// Game snapshot after the shot.
    pub game: wumpus::GameView,
    /// Whether the arrow hit the wumpus.
    pub hit: bool,
}

/// Builds the application router with fresh engine state.
pub fn router() -> Router {
    router_with_state(AppState::new())
}

/// Builds the application router over the given state.
pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/move", post(make_move))
        .route("/reset", post(reset_game))
        .route("/set_options", post(set_options))
        .route("/wumpus/start", post(wumpus_start))
        .route("/wumpus/move", post(wumpus_move))
        .route("/wumpus/shoot", post(wumpus_shoot))
        .with_state(state)
}

/// Applies a player move and the AI's reply.
#[instrument(skip(state))]
async fn make_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Json<BoardResponse> {
    let [row, col] = req.cell;
    debug!(row, col, "Processing move");
    let mut game = state.tictactoe.lock().unwrap();
    game.play(row, col, &mut rand::thread_rng());
    info!(row, col, status = ?game.status(), "Move processed");
    Json(BoardResponse::from_game(&game))
}

/// Clears the board. Scores persist across resets.
#[instrument(skip(state))]
async fn reset_game(State(state): State<AppState>) -> Json<BoardResponse> {
    let mut game = state.tictactoe.lock().unwrap();
    game.reset();
    info!("Board reset");
    Json(BoardResponse::from_game(&game))
}

/// Reassigns the player's mark and the difficulty, clearing the board.
#[instrument(skip(state))]
async fn set_options(
    State(state): State<AppState>,
    Json(req): Json<SetOptionsRequest>,
) -> Result<Json<BoardResponse>, ApiError> {
    let mark = tictactoe::Mark::from_symbol(&req.player_symbol)
        .ok_or_else(|| ApiError::InvalidOption(format!("player_symbol {:?}", req.player_symbol)))?;
    let difficulty = tictactoe::Difficulty::from_str(&req.difficulty)
        .map_err(|_| ApiError::InvalidOption(format!("difficulty {:?}", req.difficulty)))?;

    let mut game = state.tictactoe.lock().unwrap();
    game.set_options(mark, difficulty);
    info!(?mark, ?difficulty, "Options applied");
    Ok(Json(BoardResponse::from_game(&game)))
}

/// Discards the current wumpus game and generates a fresh layout.
#[instrument(skip(state))]
async fn wumpus_start(State(state): State<AppState>) -> Json<WumpusResponse> {
    let mut game = state.wumpus.lock().unwrap();
    *game = wumpus::Game::new(&mut rand::thread_rng());
    info!("Wumpus game started");
    Json(WumpusResponse { game: game.view() })
}

/// Moves the player one cell and reports the resulting senses.
#[instrument(skip(state))]
async fn wumpus_move(
    State(state): State<AppState>,
    Json(req): Json<DirectionRequest>,
) -> Json<WumpusResponse> {
    let mut game = state.wumpus.lock().unwrap();
    game.move_player(req.direction);
    debug!(direction = %req.direction, pos = ?game.player_pos(), "Player moved");
    Json(WumpusResponse { game: game.view() })
}

/// Fires an arrow and reports whether it hit.
#[instrument(skip(state))]
async fn wumpus_shoot(
    State(state): State<AppState>,
    Json(req): Json<DirectionRequest>,
) -> Json<ShootResponse> {
    let mut game = state.wumpus.lock().unwrap();
    let hit = game.shoot(req.direction);
    info!(direction = %req.direction, hit, "Shot resolved");
    Json(ShootResponse {
        game: game.view(),
        hit,
    })
}

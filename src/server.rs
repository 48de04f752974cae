//! REST API over the session registry.
//!
//! Routes mirror the narrow core interface: create a game, read its
//! state, apply a move. Agent turns are run server-side whenever a
//! successful move hands the turn to an agent seat.

use crate::games::mancala::{GameStatus, Side, Winner};
use crate::session::{GameId, GameSnapshot, Player, PlayerType, SessionError, SessionManager};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Request body for creating a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Name of the human seated at south.
    #[serde(default = "default_player1_name")]
    pub player1_name: String,
    /// Name for the north seat; defaults per the seat type.
    #[serde(default)]
    pub player2_name: Option<String>,
    /// Who occupies the north seat.
    #[serde(default = "default_player2_type")]
    pub player2_type: PlayerType,
}

fn default_player1_name() -> String {
    "Player 1".to_string()
}

fn default_player2_type() -> PlayerType {
    PlayerType::Agent
}

/// Game state as serialized on the wire.
///
/// `board` keeps the fixed slot order `[south pits, south store, north
/// pits, north store]`; `current_player` is the seat index; `winner` is a
/// seat index, or -1 for a draw, and absent while the game is live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateBody {
    /// Session ID.
    pub id: GameId,
    /// Slots in wire order.
    pub board: Vec<u32>,
    /// Seat index of the side to move.
    pub current_player: u8,
    /// `active` or `over`.
    pub status: GameStatus,
    /// Winning seat index, -1 for a draw, absent while live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<i8>,
}

impl From<GameSnapshot> for GameStateBody {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            id: snapshot.id,
            current_player: snapshot.current_side.index() as u8,
            status: snapshot.status,
            winner: snapshot.winner.map(|winner| match winner {
                Winner::Side(side) => side.index() as i8,
                Winner::Draw => -1,
            }),
            board: snapshot.board,
        }
    }
}

/// Request body for a move, in 1-based per-side pit numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Pit number, 1 up to the pits-per-side count.
    pub pit_index: usize,
}

/// Response body for a move: the last outcome plus the resulting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Whether the move was applied.
    pub success: bool,
    /// Human-readable reason or result.
    pub message: String,
    /// The mover keeps the turn.
    pub extra_turn: bool,
    /// The game has ended.
    pub is_game_over: bool,
    /// State after the move and any agent turns it triggered.
    pub game_state: GameStateBody,
}

/// Request-level API failure.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Unknown game identifier.
    NotFound(String),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => {
                warn!(detail = %detail, "Request for unknown game");
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({ "detail": detail })),
                )
                    .into_response()
            }
        }
    }
}

/// Builds the application router over a shared session registry.
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/games", post(create_game))
        .route("/api/v1/games/{id}", get(get_game))
        .route("/api/v1/games/{id}/moves", post(make_move))
        .with_state(sessions)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Mancala Game API!" }))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[instrument(skip(sessions, request))]
async fn create_game(
    State(sessions): State<SessionManager>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<GameStateBody>, ApiError> {
    let player2_name = request.player2_name.unwrap_or_else(|| match request.player2_type {
        PlayerType::Agent => "Agent".to_string(),
        PlayerType::Human => "Player 2".to_string(),
    });

    let id = sessions.create_game(
        Player::human(request.player1_name),
        Some(Player {
            name: player2_name,
            player_type: request.player2_type,
        }),
    );
    info!(game_id = %id, "Game created via API");

    // Should the opening turn sit with an agent, play it out now.
    if sessions.snapshot(id)?.current_side == Side::North {
        sessions.run_agent_turns(id)?;
    }

    Ok(Json(sessions.snapshot(id)?.into()))
}

#[instrument(skip(sessions), fields(game_id = %id))]
async fn get_game(
    State(sessions): State<SessionManager>,
    Path(id): Path<GameId>,
) -> Result<Json<GameStateBody>, ApiError> {
    Ok(Json(sessions.snapshot(id)?.into()))
}

#[instrument(skip(sessions, request), fields(game_id = %id))]
async fn make_move(
    State(sessions): State<SessionManager>,
    Path(id): Path<GameId>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let mut outcome = sessions.make_move(id, request.pit_index)?;

    // A successful move that passes the turn hands it to the agent, whose
    // last outcome becomes the reported one.
    if outcome.success && !outcome.extra_turn && !outcome.game_over {
        if let Some(last) = sessions.run_agent_turns(id)?.into_iter().next_back() {
            outcome = last;
        }
    }

    let game_state = sessions.snapshot(id)?.into();
    Ok(Json(MoveResponse {
        success: outcome.success,
        message: outcome.message,
        extra_turn: outcome.extra_turn,
        is_game_over: outcome.game_over,
        game_state,
    }))
}

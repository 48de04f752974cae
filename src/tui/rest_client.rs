//! REST client for playing against a remote server.

use crate::server::{CreateGameRequest, GameStateBody, MoveRequest, MoveResponse};
use crate::session::{GameId, PlayerType};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// HTTP client for the game API.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a game and returns its initial state.
    #[instrument(skip(self))]
    pub async fn create_game(
        &self,
        player_name: &str,
        opponent: PlayerType,
    ) -> Result<GameStateBody> {
        info!("Creating remote game");
        let request = CreateGameRequest {
            player1_name: player_name.to_string(),
            player2_name: None,
            player2_type: opponent,
        };

        let state: GameStateBody = self
            .client
            .post(format!("{}/api/v1/games", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .context("Create game request failed")?
            .json()
            .await?;

        info!(game_id = %state.id, "Remote game created");
        Ok(state)
    }

    /// Fetches the current game state.
    #[instrument(skip(self), fields(game_id = %id))]
    pub async fn get_state(&self, id: GameId) -> Result<GameStateBody> {
        debug!("Fetching game state");
        let state = self
            .client
            .get(format!("{}/api/v1/games/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()
            .context("Get state request failed")?
            .json()
            .await?;
        Ok(state)
    }

    /// Submits a move in 1-based per-side pit numbering.
    ///
    /// The server applies any agent turns the move triggers before
    /// responding.
    #[instrument(skip(self), fields(game_id = %id))]
    pub async fn make_move(&self, id: GameId, pit: usize) -> Result<MoveResponse> {
        info!(pit, "Submitting move");
        let response = self
            .client
            .post(format!("{}/api/v1/games/{}/moves", self.base_url, id))
            .json(&MoveRequest { pit_index: pit })
            .send()
            .await?
            .error_for_status()
            .context("Move request failed")?
            .json()
            .await?;
        Ok(response)
    }
}

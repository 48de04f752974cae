//! Agent seat backed by the heuristic opponent.

use super::Seat;
use crate::games::mancala::Side;
use crate::session::{GameId, GameSnapshot, SessionManager};
use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Heuristic opponent seat with a cosmetic thinking pause.
pub struct AgentSeat {
    name: String,
    sessions: SessionManager,
    game_id: GameId,
    delay: Duration,
}

impl AgentSeat {
    /// Creates a new agent seat.
    pub fn new(
        name: impl Into<String>,
        sessions: SessionManager,
        game_id: GameId,
        delay: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            sessions,
            game_id,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Seat for AgentSeat {
    async fn choose_pit(&mut self, snapshot: &GameSnapshot) -> Result<usize> {
        sleep(self.delay).await;

        let Some(index) = self.sessions.agent_move(self.game_id)? else {
            anyhow::bail!("Agent has no playable pit")
        };

        // The registry hands back an absolute slot index; the move API
        // takes 1-based per-side numbering.
        let pits = snapshot.pits_per_side();
        let pit = match snapshot.current_side {
            Side::South => index + 1,
            Side::North => index - pits,
        };
        debug!(index, pit, "Agent chose pit");
        Ok(pit)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Game orchestration between seats.

use super::seats::Seat;
use crate::games::mancala::{GameStatus, MoveOutcome, Winner};
use crate::session::{GameId, GameSnapshot, PlayerType, SessionManager};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Fresh snapshot of the board.
    StateChanged(GameSnapshot),
    /// Agent is thinking.
    AgentThinking,
    /// A move was applied or rejected.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// 1-based pit number the mover chose.
        pit: usize,
        /// Resulting outcome.
        outcome: MoveOutcome,
    },
    /// Game ended.
    GameOver {
        /// Final verdict, if settled.
        winner: Option<Winner>,
    },
}

/// Orchestrates gameplay between two seats.
pub struct Orchestrator {
    sessions: SessionManager,
    game_id: GameId,
    seats: [Box<dyn Seat>; 2],
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator over an existing game.
    pub fn new(
        sessions: SessionManager,
        game_id: GameId,
        seats: [Box<dyn Seat>; 2],
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            sessions,
            game_id,
            seats,
            event_tx,
        }
    }

    /// Runs the game loop until the game ends.
    ///
    /// Extra turns need no special casing here: the side to move is read
    /// fresh each iteration, so a mover who kept the turn is simply asked
    /// again.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");

        loop {
            let snapshot = self.sessions.snapshot(self.game_id)?;
            self.event_tx.send(GameEvent::StateChanged(snapshot.clone()))?;

            if snapshot.status == GameStatus::Over {
                self.event_tx.send(GameEvent::GameOver {
                    winner: snapshot.winner,
                })?;
                return Ok(());
            }

            let side = snapshot.current_side;
            if snapshot.player(side).player_type == PlayerType::Agent {
                self.event_tx.send(GameEvent::AgentThinking)?;
            }

            let seat = &mut self.seats[side.index()];
            let player_name = seat.name().to_string();

            debug!(player = %player_name, "Waiting for move");
            let pit = seat.choose_pit(&snapshot).await?;

            let outcome = self.sessions.make_move(self.game_id, pit)?;
            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                pit,
                outcome,
            })?;
        }
    }
}

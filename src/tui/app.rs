//! Application state for the standalone client.

use super::orchestrator::GameEvent;
use super::ui::GameView;
use crate::games::mancala::{GameStatus, Side, Winner};
use crate::session::GameSnapshot;
use tracing::debug;

/// Main application state.
pub struct App {
    snapshot: Option<GameSnapshot>,
    status_message: String,
    game_over: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            snapshot: None,
            status_message: "Setting up the board...".to_string(),
            game_over: false,
        }
    }

    /// True once the current game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(snapshot) => {
                // First snapshot: prompt the opening turn.
                if self.snapshot.is_none() {
                    self.status_message =
                        format!("{}'s turn.", snapshot.player(snapshot.current_side).name);
                }
                self.snapshot = Some(snapshot);
            }
            GameEvent::AgentThinking => {
                let name = self
                    .current_player_name()
                    .unwrap_or_else(|| "Agent".to_string());
                self.status_message = format!("{} is thinking...", name);
            }
            GameEvent::MoveMade {
                player,
                pit,
                outcome,
            } => {
                self.status_message = if outcome.success {
                    format!("{} played pit {}. {}", player, pit, outcome.message)
                } else {
                    outcome.message
                };
            }
            GameEvent::GameOver { winner } => {
                self.game_over = true;
                let verdict = match winner {
                    Some(Winner::Side(side)) => {
                        let name = self.player_name(side).unwrap_or_else(|| side.to_string());
                        format!("{} wins!", name)
                    }
                    Some(Winner::Draw) => "The game ended in a draw!".to_string(),
                    None => "Game over!".to_string(),
                };
                self.status_message = format!("{} Press 'r' to restart or 'q' to quit.", verdict);
            }
        }
    }

    /// Resets for a fresh game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.snapshot = None;
        self.status_message = "Setting up the board...".to_string();
        self.game_over = false;
    }

    /// Builds the view for the current frame.
    pub fn view(&self) -> GameView {
        let (board, current_side, names) = match &self.snapshot {
            Some(snapshot) => (
                snapshot.board.clone(),
                (snapshot.status == GameStatus::Active).then_some(snapshot.current_side),
                [
                    snapshot.players[0].name.clone(),
                    snapshot.players[1].name.clone(),
                ],
            ),
            None => (Vec::new(), None, ["South".to_string(), "North".to_string()]),
        };

        let pits = if board.is_empty() {
            6
        } else {
            (board.len() - 2) / 2
        };

        GameView {
            board,
            current_side,
            names,
            status: self.status_message.clone(),
            help: format!("Keys: 1-{} select pit, 'r' restart, 'q' quit", pits),
        }
    }

    fn player_name(&self, side: Side) -> Option<String> {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.player(side).name.clone())
    }

    fn current_player_name(&self) -> Option<String> {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.player(snapshot.current_side).name.clone())
    }
}

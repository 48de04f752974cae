//! Game session management and turn orchestration.

use crate::games::mancala::{Agent, Game, GameStatus, MoveOutcome, Side, Winner};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game session.
pub type GameId = Uuid;

/// Type of player occupying a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerType {
    /// Human player via the TUI or the REST API.
    Human,
    /// Built-in heuristic opponent.
    Agent,
}

/// A player occupying one seat of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Type of player.
    pub player_type: PlayerType,
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_type: PlayerType::Human,
        }
    }

    /// Creates an agent player.
    pub fn agent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_type: PlayerType::Agent,
        }
    }
}

/// A game session: one game plus its two seats.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: GameId,
    /// The game state.
    pub game: Game,
    /// Seats in wire order (south first).
    pub players: [Player; 2],
}

impl GameSession {
    fn new(id: GameId, game: Game, players: [Player; 2]) -> Self {
        info!(game_id = %id, "Creating new game session");
        Self { id, game, players }
    }

    /// The player seated at `side`.
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }
}

/// Read model of a session handed to presentation layers.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Session ID.
    pub id: GameId,
    /// Slots in wire order: south pits, south store, north pits, north store.
    pub board: Vec<u32>,
    /// The side to move.
    pub current_side: Side,
    /// Whether the game accepts further moves.
    pub status: GameStatus,
    /// Winner once the game is over, `None` while it is live.
    pub winner: Option<Winner>,
    /// Seats in wire order.
    pub players: [Player; 2],
}

impl GameSnapshot {
    /// Number of pits per side, recovered from the slot layout.
    pub fn pits_per_side(&self) -> usize {
        (self.board.len() - 2) / 2
    }

    /// The player seated at `side`.
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }
}

/// Errors from the session registry.
#[derive(Debug, Clone, Display, Error)]
pub enum SessionError {
    /// No session is bound to the identifier.
    #[display("game {_0} not found")]
    NotFound(#[error(not(source))] GameId),
}

/// Registry of live game sessions.
///
/// The outer lock guards only the map; each session carries its own lock,
/// so exactly one in-flight operation owns a game at a time.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<GameId, Arc<Mutex<GameSession>>>>>,
    agent: Agent,
    pits: usize,
    stones: u32,
}

impl SessionManager {
    /// Creates a registry whose games start with `pits` pits per side and
    /// `stones` stones in each pit.
    #[instrument]
    pub fn new(pits: usize, stones: u32) -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            agent: Agent,
            pits,
            stones,
        }
    }

    /// Creates a new game and returns its identifier.
    ///
    /// An absent second player defaults to the built-in agent.
    #[instrument(skip(self, player1, player2))]
    pub fn create_game(&self, player1: Player, player2: Option<Player>) -> GameId {
        let id = Uuid::new_v4();
        let player2 = player2.unwrap_or_else(|| Player::agent("Agent"));
        let session = GameSession::new(
            id,
            Game::new(self.pits, self.stones),
            [player1, player2],
        );

        self.sessions
            .lock()
            .unwrap()
            .insert(id, Arc::new(Mutex::new(session)));

        info!(game_id = %id, "Created new game");
        id
    }

    fn session(&self, id: GameId) -> Result<Arc<Mutex<GameSession>>, SessionError> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(&id).cloned().ok_or_else(|| {
            debug!(game_id = %id, "Game not found");
            SessionError::NotFound(id)
        })
    }

    /// Current state of a game.
    ///
    /// Once the game is over this also settles the winner, sweeping each
    /// side's remaining stones into its store.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: GameId) -> Result<GameSnapshot, SessionError> {
        let session = self.session(id)?;
        let mut session = session.lock().unwrap();

        let winner = session.game.winner();
        Ok(GameSnapshot {
            id,
            board: session.game.board().slots().to_vec(),
            current_side: session.game.current_side(),
            status: session.game.status(),
            winner,
            players: session.players.clone(),
        })
    }

    /// Applies a move for the side to move, taking the caller's 1-based
    /// per-side pit numbering.
    ///
    /// Rule violations (out-of-range pit, empty pit, finished game) come
    /// back as unsuccessful outcomes, not errors.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn make_move(&self, id: GameId, pit_number: usize) -> Result<MoveOutcome, SessionError> {
        let session = self.session(id)?;
        let mut session = session.lock().unwrap();

        let pits = session.game.board().pits_per_side();
        if pit_number == 0 || pit_number > pits {
            warn!(pit_number, "Pit number out of range");
            return Ok(MoveOutcome::rejected("Invalid pit selected."));
        }

        let pit_index = match session.game.current_side() {
            Side::South => pit_number - 1,
            Side::North => pits + pit_number,
        };

        let outcome = session.game.make_move(pit_index);
        info!(
            pit_number,
            success = outcome.success,
            extra_turn = outcome.extra_turn,
            game_over = outcome.game_over,
            "Move processed"
        );
        Ok(outcome)
    }

    /// Asks the heuristic opponent for a move, or `None` when the side to
    /// move is not an agent or has nothing to play.
    ///
    /// Returns an absolute board index, as consumed by the agent-turn loop.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn agent_move(&self, id: GameId) -> Result<Option<usize>, SessionError> {
        let session = self.session(id)?;
        let session = session.lock().unwrap();

        if session.player(session.game.current_side()).player_type != PlayerType::Agent {
            return Ok(None);
        }
        Ok(self.agent.choose_move(&session.game))
    }

    /// Runs the opponent for as long as an agent holds the turn.
    ///
    /// Stops after the first outcome that is not an extra turn, when the
    /// game ends, or defensively if the agent reports no playable pit.
    /// Returns the outcomes in move order, possibly empty.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn run_agent_turns(&self, id: GameId) -> Result<Vec<MoveOutcome>, SessionError> {
        let session = self.session(id)?;
        let mut session = session.lock().unwrap();
        let mut outcomes = Vec::new();

        while !session.game.is_over()
            && session.player(session.game.current_side()).player_type == PlayerType::Agent
        {
            let Some(pit_index) = self.agent.choose_move(&session.game) else {
                warn!("Agent found no playable pit");
                break;
            };

            let outcome = session.game.make_move(pit_index);
            info!(
                pit_index,
                success = outcome.success,
                extra_turn = outcome.extra_turn,
                game_over = outcome.game_over,
                "Agent moved"
            );

            let keep_turn = outcome.extra_turn && !outcome.game_over;
            outcomes.push(outcome);
            if !keep_turn {
                break;
            }
        }

        Ok(outcomes)
    }
}

//! Mancala game library.
//!
//! # Architecture
//!
//! - **Games**: the rules engine (board geometry, move execution, the
//!   heuristic opponent)
//! - **Session**: in-memory game registry and turn orchestration
//! - **Server**: REST API over the registry
//! - **Tui**: terminal client, standalone or against a remote server
//!
//! # Example
//!
//! ```
//! use mancala::{Player, SessionManager};
//!
//! let sessions = SessionManager::new(6, 6);
//! let id = sessions.create_game(Player::human("Human"), None);
//!
//! let outcome = sessions.make_move(id, 1).unwrap();
//! assert!(outcome.success);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod server;
mod session;

// Terminal client
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::mancala::{Agent, Board, Game, GameStatus, MoveOutcome, Side, Winner};

// Crate-level exports - REST API
pub use server::{
    ApiError, CreateGameRequest, GameStateBody, MoveRequest, MoveResponse, router,
};

// Crate-level exports - Session management
pub use session::{
    GameId, GameSession, GameSnapshot, Player, PlayerType, SessionError, SessionManager,
};

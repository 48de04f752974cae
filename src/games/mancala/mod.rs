//! Mancala rules engine: board geometry, move execution, and the
//! heuristic opponent.

mod agent;
mod rules;
mod types;

pub use agent::Agent;
pub use rules::{Game, MoveOutcome};
pub use types::{Board, GameStatus, Side, Winner};

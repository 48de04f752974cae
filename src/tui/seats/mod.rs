//! Seat trait and implementations.

mod agent;
mod human;

pub use agent::AgentSeat;
pub use human::HumanSeat;

use crate::session::GameSnapshot;
use anyhow::Result;

/// A seat that can produce moves.
#[async_trait::async_trait]
pub trait Seat: Send {
    /// Returns the 1-based pit number of the next move.
    async fn choose_pit(&mut self, snapshot: &GameSnapshot) -> Result<usize>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;
}

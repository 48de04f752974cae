//! Human seat that takes keyboard input.

use super::Seat;
use crate::session::GameSnapshot;
use anyhow::Result;
use crossterm::event::KeyCode;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Human seat fed by the main input loop.
///
/// In a hotseat game both human seats share the one keyboard receiver;
/// only the seat holding the turn listens at any moment.
pub struct HumanSeat {
    name: String,
    input_rx: Arc<Mutex<mpsc::UnboundedReceiver<KeyCode>>>,
}

impl HumanSeat {
    /// Creates a new human seat.
    pub fn new(
        name: impl Into<String>,
        input_rx: Arc<Mutex<mpsc::UnboundedReceiver<KeyCode>>>,
    ) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Seat for HumanSeat {
    async fn choose_pit(&mut self, snapshot: &GameSnapshot) -> Result<usize> {
        let pits = snapshot.pits_per_side();
        let mut input_rx = self.input_rx.lock().await;

        // Wait for a digit naming one of the mover's pits.
        while let Some(key) = input_rx.recv().await {
            if let KeyCode::Char(c) = key
                && let Some(digit) = c.to_digit(10)
            {
                let pit = digit as usize;
                if (1..=pits).contains(&pit) {
                    return Ok(pit);
                }
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}

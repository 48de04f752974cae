//! Heuristic opponent.

use super::rules::Game;
use tracing::{debug, instrument};

/// Rule-based computer opponent.
///
/// Stateless and deterministic: given the same board it always picks the
/// same pit. No lookahead beyond the current move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Agent;

impl Agent {
    /// Picks an absolute pit index for the side to move, or `None` when
    /// no owned pit holds a stone.
    ///
    /// Priority over playable pits in index order: a move that lands the
    /// last stone in the own store, then a move that lands in a currently
    /// empty own pit with a non-empty opposite, then the fullest pit.
    ///
    /// The capture rule predicts the landing slot as `(pit + stones) mod
    /// slots` against pre-move counts. It ignores store skips and the
    /// stones a wrapping sow drops along the way, so it can misjudge long
    /// moves; that approximation is part of the agent's observable
    /// behavior and is kept as is.
    #[instrument(skip_all, fields(side = %game.current_side()))]
    pub fn choose_move(&self, game: &Game) -> Option<usize> {
        let board = game.board();
        let side = game.current_side();

        let playable: Vec<usize> = board
            .side_pits(side)
            .filter(|&pit| board.stones_at(pit) > 0)
            .collect();

        if playable.is_empty() {
            return None;
        }

        let slots = board.slot_count();
        let own_store = board.store_index(side);

        // Land in the own store for another turn.
        for &pit in &playable {
            if (pit + board.stones_at(pit) as usize) % slots == own_store {
                debug!(pit, "Choosing extra-turn move");
                return Some(pit);
            }
        }

        // Land in an empty own pit across from opponent stones.
        for &pit in &playable {
            let last_pit = (pit + board.stones_at(pit) as usize) % slots;
            if board.side_pits(side).contains(&last_pit) && board.stones_at(last_pit) == 0 {
                if let Some(opposite) = board.opposite_index(last_pit)
                    && board.stones_at(opposite) > 0
                {
                    debug!(pit, "Choosing capture move");
                    return Some(pit);
                }
            }
        }

        // Fall back to the fullest pit, lowest index on ties.
        let mut best = playable[0];
        for &pit in &playable[1..] {
            if board.stones_at(pit) > board.stones_at(best) {
                best = pit;
            }
        }
        debug!(pit = best, "Choosing fullest pit");
        Some(best)
    }
}

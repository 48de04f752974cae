//! Move execution for mancala.

use super::types::{Board, GameStatus, Side, Winner};
use tracing::instrument;

/// Result of a single move attempt.
///
/// Rule violations are reported here with `success = false`, never as
/// errors; the caller re-prompts. The flags are authoritative, the
/// message is presentation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveOutcome {
    /// Whether the move was applied.
    pub success: bool,
    /// Human-readable reason or result.
    pub message: String,
    /// The mover keeps the turn.
    pub extra_turn: bool,
    /// The move ended the game.
    pub game_over: bool,
}

impl MoveOutcome {
    /// Rejected move; the board was not touched.
    pub(crate) fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            extra_turn: false,
            game_over: false,
        }
    }

    /// Applied move that ended the game.
    fn finished() -> Self {
        Self {
            success: true,
            message: "Game over!".to_string(),
            extra_turn: false,
            game_over: true,
        }
    }

    /// Applied move whose last stone landed in the mover's store.
    fn extra_turn() -> Self {
        Self {
            success: true,
            message: "You get another turn!".to_string(),
            extra_turn: true,
            game_over: false,
        }
    }

    /// Applied move that passed the turn.
    fn completed() -> Self {
        Self {
            success: true,
            message: "Move completed.".to_string(),
            extra_turn: false,
            game_over: false,
        }
    }
}

/// Mancala game engine: one board, the side to move, and a terminal flag.
///
/// The board is owned exclusively; everything outside this type reads it
/// through accessors and mutates it only via [`Game::make_move`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_side: Side,
    over: bool,
}

impl Game {
    /// Creates a game on a fresh board. South moves first.
    #[instrument]
    pub fn new(pits: usize, stones: u32) -> Self {
        Self {
            board: Board::new(pits, stones),
            current_side: Side::South,
            over: false,
        }
    }

    /// Creates a game over a prepared board position.
    pub fn from_board(board: Board, current_side: Side) -> Self {
        Self {
            board,
            current_side,
            over: false,
        }
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// True once the game has ended; no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Current status for presentation.
    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Over
        } else {
            GameStatus::Active
        }
    }

    /// Winner of a finished game, sweeping remaining stones into the
    /// stores. `None` while the game is live.
    pub fn winner(&mut self) -> Option<Winner> {
        if !self.over {
            return None;
        }
        self.board.winner()
    }

    /// Sows from the pit at absolute `pit_index` for the side to move.
    ///
    /// Exactly one of three terminal branches applies per move, checked
    /// in order: the move empties a side (game over, no side switch),
    /// the last stone lands in the mover's store (extra turn), or the
    /// capture check runs and the turn passes.
    #[instrument(skip(self), fields(side = %self.current_side))]
    pub fn make_move(&mut self, pit_index: usize) -> MoveOutcome {
        // Validate move
        if self.over {
            return MoveOutcome::rejected("Game is already over.");
        }

        if !self.board.side_pits(self.current_side).contains(&pit_index) {
            return MoveOutcome::rejected("Invalid pit selected.");
        }

        if self.board.stones_at(pit_index) == 0 {
            return MoveOutcome::rejected("Selected pit is empty.");
        }

        // Execute move
        let mut stones = self.board.stones_at(pit_index);
        self.board.set_stones(pit_index, 0);

        let mut index = pit_index;
        let opponent_store = self.board.store_index(self.current_side.opponent());

        // Distribute stones, skipping the opponent's store. The skip does
        // not consume a stone.
        while stones > 0 {
            index = (index + 1) % self.board.slot_count();
            if index == opponent_store {
                continue;
            }
            self.board.set_stones(index, self.board.stones_at(index) + 1);
            stones -= 1;
        }

        let last_pit = index;

        if self.board.is_over() {
            self.over = true;
            return MoveOutcome::finished();
        }

        // Last stone in own store: the turn repeats.
        if last_pit == self.board.store_index(self.current_side) {
            return MoveOutcome::extra_turn();
        }

        // Last stone in an own pit that was empty before this sowing:
        // capture the opposite pit, if it holds anything.
        if self.board.side_pits(self.current_side).contains(&last_pit)
            && self.board.stones_at(last_pit) == 1
        {
            if let Some(opposite) = self.board.opposite_index(last_pit)
                && self.board.stones_at(opposite) > 0
            {
                let store = self.board.store_index(self.current_side);
                let captured = self.board.stones_at(opposite) + 1;
                self.board.set_stones(store, self.board.stones_at(store) + captured);
                self.board.set_stones(opposite, 0);
                self.board.set_stones(last_pit, 0);
            }
        }

        self.current_side = self.current_side.opponent();
        MoveOutcome::completed()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(6, 6)
    }
}

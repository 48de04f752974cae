//! Core domain types for mancala.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A seat at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Bottom row; moves first.
    South,
    /// Top row.
    North,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// Numeric seat index used on the wire (south is 0).
    pub fn index(self) -> usize {
        match self {
            Side::South => 0,
            Side::North => 1,
        }
    }

    /// Side for a wire index, if valid.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::South),
            1 => Some(Side::North),
            _ => None,
        }
    }
}

/// Outcome of a finished game.
///
/// Distinct from "no winner yet": a live game has no `Winner` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The given side holds more stones in its store.
    Side(Side),
    /// Both stores hold the same count.
    Draw,
}

/// Whether a game is still accepting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Moves are being accepted.
    Active,
    /// Terminal; no further moves.
    Over,
}

/// The mancala board: a row of pits and a store for each side.
///
/// Slots are laid out as `[south pits, south store, north pits, north store]`,
/// so a board with `pits` pits per side has `2 * pits + 2` slots. Wire formats
/// preserve this order; pit-number-to-index mapping depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pits: usize,
    slots: Vec<u32>,
}

impl Board {
    /// Creates a board with `stones` seeded into every pit and empty stores.
    pub fn new(pits: usize, stones: u32) -> Self {
        let mut slots = vec![stones; pits];
        slots.push(0);
        slots.extend(std::iter::repeat_n(stones, pits));
        slots.push(0);
        Self { pits, slots }
    }

    /// Total number of slots, both stores included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of pits per side (stores excluded).
    pub fn pits_per_side(&self) -> usize {
        self.pits
    }

    /// Indices of the pits owned by `side`, in sowing order.
    pub fn side_pits(&self, side: Side) -> Range<usize> {
        match side {
            Side::South => 0..self.pits,
            Side::North => self.pits + 1..2 * self.pits + 1,
        }
    }

    /// Index of `side`'s store.
    pub fn store_index(&self, side: Side) -> usize {
        match side {
            Side::South => self.pits,
            Side::North => 2 * self.pits + 1,
        }
    }

    /// Index of the pit mirror-opposite to `index`, or `None` for stores.
    pub fn opposite_index(&self, index: usize) -> Option<usize> {
        if self.side_pits(Side::South).contains(&index)
            || self.side_pits(Side::North).contains(&index)
        {
            Some(2 * self.pits - index)
        } else {
            None
        }
    }

    /// Stones currently in the slot at `index`.
    ///
    /// Panics on an out-of-range index; callers guarantee validity.
    pub fn stones_at(&self, index: usize) -> u32 {
        self.slots[index]
    }

    /// Overwrites the stone count at `index`.
    pub fn set_stones(&mut self, index: usize, count: u32) {
        self.slots[index] = count;
    }

    /// All slots in wire order.
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    /// True once either side's pits are all empty.
    pub fn is_over(&self) -> bool {
        let south_empty = self.side_pits(Side::South).all(|i| self.slots[i] == 0);
        let north_empty = self.side_pits(Side::North).all(|i| self.slots[i] == 0);
        south_empty || north_empty
    }

    /// Sweeps each side's remaining pit stones into that side's own store.
    ///
    /// No-op while the game is live, idempotent once it is over. Stones
    /// never cross the midline here.
    pub fn collect_remaining(&mut self) {
        if !self.is_over() {
            return;
        }
        for side in [Side::South, Side::North] {
            let store = self.store_index(side);
            for pit in self.side_pits(side) {
                self.slots[store] += self.slots[pit];
                self.slots[pit] = 0;
            }
        }
    }

    /// Winner by store count, or `None` while the game is live.
    ///
    /// Sweeps remaining stones into the stores before comparing.
    pub fn winner(&mut self) -> Option<Winner> {
        if !self.is_over() {
            return None;
        }
        self.collect_remaining();

        let south = self.slots[self.store_index(Side::South)];
        let north = self.slots[self.store_index(Side::North)];

        if south > north {
            Some(Winner::Side(Side::South))
        } else if north > south {
            Some(Winner::Side(Side::North))
        } else {
            Some(Winner::Draw)
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(6, 6)
    }
}

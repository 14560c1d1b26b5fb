//! Cumulative score totals across games.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Wins per player and draws, counted once per completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreTotals {
    x: u32,
    o: u32,
    draws: u32,
}

impl ScoreTotals {
    /// Creates zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Games won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Completed games counted so far.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Counts one completed game.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x += 1,
            Outcome::Winner(Player::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

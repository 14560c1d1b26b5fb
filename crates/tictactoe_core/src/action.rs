//! Moves as first-class records.
//!
//! The engine keeps the moves of the game in progress as a log and copies
//! them into the history entry when the game concludes.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What happened to a cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The selection was rejected (occupied square or game over); nothing changed.
    Ignored,
    /// The move was placed and the game goes on.
    Continued,
    /// The move was placed and ended the game.
    Concluded(super::Outcome),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}

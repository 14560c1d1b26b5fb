//! Records of completed games.

use super::rules::WinningLine;
use super::{Board, Move, Outcome, Player};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable record of one completed game.
///
/// Entries are only built by the engine when a game concludes; there is no
/// way to change one after it has been appended.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Winner, or `None` for a draw.
    winner: Option<Player>,
    /// Board at the end of the game.
    final_board: Board,
    /// Completed line, for won games.
    winning_line: Option<WinningLine>,
    /// Moves of the game in the order they were played.
    moves: Vec<Move>,
    /// When the game concluded.
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub(crate) fn new(
        outcome: Outcome,
        final_board: Board,
        winning_line: Option<WinningLine>,
        moves: Vec<Move>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            winner: outcome.winner(),
            final_board,
            winning_line,
            moves,
            timestamp,
        }
    }

    /// Outcome of the recorded game.
    pub fn outcome(&self) -> Outcome {
        Outcome::from(self.winner)
    }
}

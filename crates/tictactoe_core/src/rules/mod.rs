//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine can re-derive its status after every move
//! instead of tracking it by hand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, find_winning_line};

use super::{Board, GameStatus, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line is complete and empty squares remain.
    Playing,
    /// A player holds a complete line.
    Won {
        /// Owner of the line.
        winner: Player,
        /// The first completed line in pattern order.
        line: WinningLine,
    },
    /// The board is full and no line is complete.
    Draw,
}

impl Evaluation {
    /// The game status this evaluation implies.
    pub fn status(self) -> GameStatus {
        match self {
            Evaluation::Playing => GameStatus::Playing,
            Evaluation::Won { winner, .. } => GameStatus::Won(winner),
            Evaluation::Draw => GameStatus::Draw,
        }
    }

    /// The completed line, present only for a win.
    pub fn winning_line(self) -> Option<WinningLine> {
        match self {
            Evaluation::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// The outcome of a concluded game, `None` while playing.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Evaluation::Playing => None,
            Evaluation::Won { winner, .. } => Some(Outcome::Winner(winner)),
            Evaluation::Draw => Some(Outcome::Draw),
        }
    }
}

/// Evaluates a board: win (with the first matching line), draw, or playing.
///
/// Pure: the same board always yields the same evaluation.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn evaluate_board(board: &Board) -> Evaluation {
    if let Some((winner, line)) = find_winning_line(board) {
        Evaluation::Won { winner, line }
    } else if is_draw(board) {
        Evaluation::Draw
    } else {
        Evaluation::Playing
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The positions of the line, in pattern order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning patterns, in evaluation priority order.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line in [`LINES`] order.
///
/// Returns the owning player and the line.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}

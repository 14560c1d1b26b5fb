//! Status invariant: the stored evaluation is the evaluation of the board.

use super::super::GameEngine;
use super::super::rules::evaluate_board;
use super::Invariant;

/// Invariant: status and winning line equal a fresh evaluation of the board.
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameEngine> for StatusMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.evaluation == evaluate_board(engine.board())
    }

    fn description() -> &'static str {
        "Status and winning line match an evaluation of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_holds_after_win() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            engine.select_cell(pos);
        }
        assert!(StatusMatchesBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_unnoticed_line_violates() {
        let mut engine = GameEngine::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            engine.board.set(pos, Square::Occupied(Player::O));
        }
        assert!(!StatusMatchesBoardInvariant::holds(&engine));
    }
}

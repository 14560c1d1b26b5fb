//! Turn invariant: the player to move is a function of the mark counts.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: X is to move exactly when both players have the same number of marks.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameEngine> for TurnMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        engine.turn() == expected
    }

    fn description() -> &'static str {
        "Player to move matches the mark counts on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_each_move() {
        let mut engine = GameEngine::new();
        assert!(TurnMatchesBoardInvariant::holds(&engine));
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            engine.select_cell(pos);
            assert!(TurnMatchesBoardInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut engine = GameEngine::new();
        engine.select_cell(Position::Center);
        engine.turn = Player::X;
        assert!(!TurnMatchesBoardInvariant::holds(&engine));
    }
}

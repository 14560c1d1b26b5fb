//! Balanced marks invariant: X moves first, so X has as many marks as O or one more.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            engine.select_cell(pos);
            assert!(BalancedMarksInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_two_extra_x_violates() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::TopLeft, Square::Occupied(Player::X));
        engine.board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }
}

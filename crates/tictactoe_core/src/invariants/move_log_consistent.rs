//! Move log invariant: every occupied square has exactly one move behind it.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: the move log length equals the occupied squares, and each
/// logged move's square holds the logged player.
pub struct MoveLogConsistentInvariant;

impl Invariant<GameEngine> for MoveLogConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        engine.moves().len() == board.occupied()
            && engine
                .moves()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Move log matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_holds_for_played_moves() {
        let mut engine = GameEngine::new();
        engine.select_cell(Position::Center);
        engine.select_cell(Position::BottomLeft);
        assert!(MoveLogConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::new();
        engine.select_cell(Position::Center);
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MoveLogConsistentInvariant::holds(&engine));
    }
}

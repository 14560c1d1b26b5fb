//! Score invariant: totals are the tally of the history.

use super::super::{GameEngine, Outcome, Player};
use super::Invariant;

/// Invariant: each score field equals the matching history entries, so
/// `x + o + draws == history.len()`.
pub struct ScoresMatchHistoryInvariant;

impl Invariant<GameEngine> for ScoresMatchHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let tally = |outcome: Outcome| {
            engine
                .history()
                .iter()
                .filter(|entry| entry.outcome() == outcome)
                .count()
        };
        let scores = engine.scores();

        scores.x() as usize == tally(Outcome::Winner(Player::X))
            && scores.o() as usize == tally(Outcome::Winner(Player::O))
            && scores.draws() as usize == tally(Outcome::Draw)
    }

    fn description() -> &'static str {
        "Score totals match the history of completed games"
    }
}

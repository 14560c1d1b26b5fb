//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every public
//! engine operation. The engine asserts the full set in debug builds, and
//! each invariant is testable on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants, so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod balanced_marks;
pub mod move_log_consistent;
pub mod scores_match_history;
pub mod status_matches_board;
pub mod turn_matches_board;

pub use balanced_marks::BalancedMarksInvariant;
pub use move_log_consistent::MoveLogConsistentInvariant;
pub use scores_match_history::ScoresMatchHistoryInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;
pub use turn_matches_board::TurnMatchesBoardInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BalancedMarksInvariant,
    TurnMatchesBoardInvariant,
    StatusMatchesBoardInvariant,
    MoveLogConsistentInvariant,
    ScoresMatchHistoryInvariant,
);

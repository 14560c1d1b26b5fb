//! Property tests for engine rules.

use proptest::prelude::*;
use tictactoe_core::{
    Board, GameEngine, MoveOutcome, Player, Position, Square, evaluate_board,
};

#[derive(Debug, Clone, Copy)]
enum Intent {
    Select(usize),
    NewGame,
    ResetAll,
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        8 => (0usize..9).prop_map(Intent::Select),
        1 => Just(Intent::NewGame),
        1 => Just(Intent::ResetAll),
    ]
}

fn square(code: u8) -> Square {
    match code {
        0 => Square::Empty,
        1 => Square::Occupied(Player::X),
        _ => Square::Occupied(Player::O),
    }
}

fn apply(engine: &mut GameEngine, intent: Intent) {
    match intent {
        Intent::Select(i) => {
            engine.select_cell(Position::ALL[i]);
        }
        Intent::NewGame => engine.new_game(),
        Intent::ResetAll => engine.reset_all(),
    }
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(codes in prop::array::uniform9(0u8..3)) {
        let board = Board::from_squares(codes.map(square));
        prop_assert_eq!(evaluate_board(&board), evaluate_board(&board));
    }

    #[test]
    fn turn_alternates_with_accepted_moves(cells in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = GameEngine::new();
        let mut accepted = 0usize;
        for i in cells {
            if engine.select_cell(Position::ALL[i]).is_accepted() {
                accepted += 1;
            }
            prop_assert_eq!(engine.turn() == Player::X, accepted % 2 == 0);
        }
    }

    #[test]
    fn rejected_selection_changes_nothing(
        cells in prop::collection::vec(0usize..9, 0..12),
        probe in 0usize..9,
    ) {
        let mut engine = GameEngine::new();
        for i in cells {
            engine.select_cell(Position::ALL[i]);
        }
        let target = Position::ALL[probe];
        let should_reject = !engine.board().is_empty(target) || !engine.status().is_playing();
        let before = engine.snapshot();

        let result = engine.select_cell(target);

        if should_reject {
            prop_assert_eq!(result, MoveOutcome::Ignored);
            prop_assert_eq!(engine.snapshot(), before);
        } else {
            prop_assert!(result.is_accepted());
        }
    }

    #[test]
    fn scores_always_match_history(intents in prop::collection::vec(intent(), 0..80)) {
        let mut engine = GameEngine::new();
        for intent in intents {
            apply(&mut engine, intent);
            let scores = engine.scores();
            prop_assert_eq!(
                (scores.x() + scores.o() + scores.draws()) as usize,
                engine.history().len()
            );
            prop_assert_eq!(engine.status(), evaluate_board(engine.board()).status());
        }
    }

    #[test]
    fn new_game_preserves_and_reset_all_clears(intents in prop::collection::vec(intent(), 0..60)) {
        let mut engine = GameEngine::new();
        for intent in intents {
            apply(&mut engine, intent);
        }
        let scores = *engine.scores();
        let history = engine.history().to_vec();

        engine.new_game();
        prop_assert_eq!(*engine.scores(), scores);
        prop_assert_eq!(engine.history(), history.as_slice());

        engine.reset_all();
        prop_assert_eq!(engine.scores().total(), 0);
        prop_assert!(engine.history().is_empty());
    }
}

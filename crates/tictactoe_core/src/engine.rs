//! The game-state engine.
//!
//! [`GameEngine`] owns the board, the turn, the derived status, the move log
//! of the game in progress, and the score totals and history that survive
//! across games. Every public mutation is a single unit of work: the new
//! board is evaluated before any field is written, so a caller never
//! observes a half-applied move.

use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{Evaluation, WinningLine, evaluate_board};
use super::{
    Board, GameStatus, HistoryEntry, Move, MoveOutcome, Outcome, Player, Position, ScoreTotals,
    Square,
};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Source of history timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Tic-tac-toe game-state engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) evaluation: Evaluation,
    pub(crate) moves: Vec<Move>,
    pub(crate) scores: ScoreTotals,
    pub(crate) history: Vec<HistoryEntry>,
    clock: Clock,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move, and no history.
    #[instrument]
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates an engine that stamps history entries with `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            evaluation: Evaluation::Playing,
            moves: Vec::new(),
            scores: ScoreTotals::new(),
            history: Vec::new(),
            clock,
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Selecting an occupied square, or any square once the game is over,
    /// is ignored and leaves the engine untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn select_cell(&mut self, position: Position) -> MoveOutcome {
        if !self.status().is_playing() {
            debug!(status = %self.status(), "Ignoring selection, game is over");
            return MoveOutcome::Ignored;
        }
        if !self.board.is_empty(position) {
            debug!("Ignoring selection, square is occupied");
            return MoveOutcome::Ignored;
        }

        let player = self.turn;
        let mut board = self.board;
        board.set(position, Square::Occupied(player));
        let evaluation = evaluate_board(&board);

        self.board = board;
        self.turn = player.opponent();
        self.evaluation = evaluation;
        self.moves.push(Move::new(player, position));
        debug!(board = %self.board.compact(), "Move placed");

        let result = match evaluation.outcome() {
            Some(outcome) => {
                self.conclude(outcome);
                MoveOutcome::Concluded(outcome)
            }
            None => MoveOutcome::Continued,
        };

        self.debug_check_invariants();
        result
    }

    /// Starts a fresh game. Scores and history are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.evaluation = Evaluation::Playing;
        self.moves.clear();
        debug!(games = self.history.len(), "New game started");
        self.debug_check_invariants();
    }

    /// Starts a fresh game and forgets all scores and history.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.new_game();
        self.scores = ScoreTotals::new();
        self.history.clear();
        info!("Scores and history cleared");
        self.debug_check_invariants();
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player entitled to the next move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.evaluation.status()
    }

    /// Completed line, present only when the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.evaluation.winning_line()
    }

    /// Score totals across completed games.
    pub fn scores(&self) -> &ScoreTotals {
        &self.scores
    }

    /// Completed games, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Moves of the game in progress, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Empty squares while the game is playing; nothing once it is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_playing() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Owned copy of everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            status: self.status(),
            winning_line: self.winning_line(),
            scores: self.scores,
            moves: self.moves.clone(),
            history: self.history.clone(),
        }
    }

    fn conclude(&mut self, outcome: Outcome) {
        self.scores.record(outcome);
        self.history.push(HistoryEntry::new(
            outcome,
            self.board,
            self.winning_line(),
            self.moves.clone(),
            (self.clock)(),
        ));
        info!(
            %outcome,
            board = %self.board.compact(),
            x = self.scores.x(),
            o = self.scores.o(),
            draws = self.scores.draws(),
            "Game concluded"
        );
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the engine state handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board at the time of the snapshot.
    board: Board,
    /// Player to move next.
    turn: Player,
    /// Game status.
    status: GameStatus,
    /// Completed line, for a won game.
    winning_line: Option<WinningLine>,
    /// Score totals.
    scores: ScoreTotals,
    /// Moves of the game in progress.
    moves: Vec<Move>,
    /// Completed games, oldest first.
    history: Vec<HistoryEntry>,
}

//! The game-state machine.
//!
//! [`GameEngine`] owns the board, the mark to move and the status.
//! Presentation never touches these directly: it sends cell selections
//! in and renders the [`Snapshot`] it gets back.
//!
//! ```text
//! InProgress ──(line completed)──> Won
//!     │                             │
//!     └──(board full)──> Draw       │
//!                         │         │
//!     <──── reset() / any selection ┘
//! ```

use super::action::{EngineError, Move, SelectionEffect};
use super::invariants::{EngineInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Value copy of the engine state, handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Mark to move next. After a win this is the loser's mark.
    pub to_move: Mark,
    /// Game status.
    pub status: GameStatus,
    /// Accepted moves of the current game.
    pub moves: Vec<Move>,
}

/// Outcome of a single cell selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// What the selection did.
    pub effect: SelectionEffect,
    /// State after the selection.
    pub snapshot: Snapshot,
}

/// Noughts and crosses engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) moves: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board and Cross to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::Cross,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the accepted moves of the current game.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the empty positions.
    pub fn valid_positions(&self) -> Vec<Position> {
        Position::valid_positions(&self.board)
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            status: self.status.clone(),
            moves: self.moves.clone(),
        }
    }

    /// Clears the board and hands the first move to Cross.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        debug!(moves = self.moves.len(), "Resetting game");
        *self = Self::new();
        self.snapshot()
    }

    /// Selects a cell by linear index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for indices outside 0-8, leaving
    /// the state untouched. In debug builds, returns
    /// [`EngineError::InvariantViolation`] if an accepted move broke an
    /// engine invariant.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn select_cell(&mut self, index: i64) -> Result<MoveResult, EngineError> {
        let position = Position::try_from(index)?;
        let result = self.apply(position);

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(result)
    }

    /// Selects a cell.
    ///
    /// - Game over: starts a new game, nothing is placed.
    /// - Cell occupied: nothing changes.
    /// - Otherwise: places the current mark, passes the turn, and
    ///   re-evaluates the status.
    ///
    /// Engine invariants are asserted in debug builds.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn select(&mut self, position: Position) -> MoveResult {
        let result = self.apply(position);
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Invariant violation after selecting {}",
            position
        );
        result
    }

    fn apply(&mut self, position: Position) -> MoveResult {
        if self.is_over() {
            info!(status = %self.status, "Selection after game end, starting new game");
            let snapshot = self.reset();
            return MoveResult {
                effect: SelectionEffect::Restarted,
                snapshot,
            };
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Cell occupied, ignoring selection");
            return MoveResult {
                effect: SelectionEffect::Ignored { position },
                snapshot: self.snapshot(),
            };
        }

        let mark = self.to_move;
        self.board.set(position, Cell::Marked(mark));
        self.moves.push(Move::new(mark, position));
        self.to_move = mark.opponent();
        self.status = evaluate(&self.board);

        debug!(%mark, %position, status = %self.status, "Move accepted");
        if self.is_over() {
            info!(status = %self.status, moves = self.moves.len(), "Game over");
        }

        MoveResult {
            effect: SelectionEffect::Placed { mark, position },
            snapshot: self.snapshot(),
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), EngineError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the status of a board.
///
/// All eight lines are checked before fullness, so a move that completes
/// a line and fills the board is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    let lines = rules::winning_lines(board);
    if let Some(mark) = lines.first().and_then(|line| line.owner(board)) {
        let lines = lines
            .into_iter()
            .filter(|line| line.owner(board) == Some(mark))
            .collect();
        return GameStatus::Won { mark, lines };
    }
    if rules::is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

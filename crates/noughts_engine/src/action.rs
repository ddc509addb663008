//! Moves, selection effects and engine errors.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// What a cell selection did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEffect {
    /// A mark was placed.
    Placed {
        /// The acting mark.
        mark: Mark,
        /// The selected cell.
        position: Position,
    },
    /// The cell was occupied; nothing changed.
    Ignored {
        /// The selected cell.
        position: Position,
    },
    /// The game was over, so the selection started a new game.
    Restarted,
}

impl SelectionEffect {
    /// Returns the acting mark if a mark was placed.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            SelectionEffect::Placed { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Errors returned by the engine.
///
/// Selecting an occupied cell is not an error, see [`SelectionEffect::Ignored`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(i64),

    /// A post-move invariant check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

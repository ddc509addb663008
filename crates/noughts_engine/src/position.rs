//! Typed cell addresses.

use super::action::EngineError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, addressed row-major as `row * 3 + column`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Linear board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column (0-2).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a linear index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from row and column, both in 0-2.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the empty positions of a board in index order.
    #[instrument(skip(board))]
    pub fn valid_positions(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<i64> for Position {
    type Error = EngineError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Position::from_index)
            .ok_or(EngineError::OutOfRange(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_column_roundtrip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_column(pos.row(), pos.column()), Some(pos));
            assert_eq!(pos.row() * 3 + pos.column(), pos.index());
        }
    }

    #[test]
    fn test_from_row_column_rejects_outside_grid() {
        assert_eq!(Position::from_row_column(3, 0), None);
        assert_eq!(Position::from_row_column(0, 3), None);
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(Position::try_from(0_i64), Ok(Position::TopLeft));
        assert_eq!(Position::try_from(8_i64), Ok(Position::BottomRight));
        assert_eq!(Position::try_from(-1_i64), Err(EngineError::OutOfRange(-1)));
        assert_eq!(Position::try_from(9_i64), Err(EngineError::OutOfRange(9)));
    }
}

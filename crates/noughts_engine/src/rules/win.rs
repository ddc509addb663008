//! Win detection.

use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Row 0-2.
    Row(usize),
    /// Column 0-2.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// The eight lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

impl WinningLine {
    /// Returns the three positions.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three linear indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Checks if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Classifies the line.
    pub fn kind(&self) -> LineKind {
        let [a, b, c] = self.0;
        if a.row() == b.row() && b.row() == c.row() {
            LineKind::Row(a.row())
        } else if a.column() == b.column() && b.column() == c.column() {
            LineKind::Column(a.column())
        } else if a == Position::TopLeft {
            LineKind::Diagonal
        } else {
            LineKind::AntiDiagonal
        }
    }

    /// Returns the mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0.map(|pos| board.get(pos));
        match a {
            Cell::Marked(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "({}, {}, {})", a, b, c)
    }
}

/// Returns every completed line, in table order.
///
/// All eight lines are checked; a single move can complete two.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<WinningLine> {
    WINNING_LINES
        .iter()
        .filter(|line| line.owner(board).is_some())
        .copied()
        .collect()
}

//! Per-cell render instructions for presentation layers.

use super::engine::Snapshot;
use super::position::Position;
use super::types::{GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// How a cell should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// Normal cell.
    #[default]
    None,
    /// Cell lies on a completed line.
    WinningLine,
    /// Game drawn; every cell carries this.
    Draw,
}

/// What to draw in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// The cell.
    pub position: Position,
    /// Mark to display, if any.
    pub mark: Option<Mark>,
    /// Emphasis.
    pub highlight: Highlight,
}

impl CellView {
    /// Text for the cell: `X`, `O` or empty.
    pub fn symbol(&self) -> &'static str {
        self.mark.map(Mark::symbol).unwrap_or("")
    }
}

impl Snapshot {
    /// Builds render instructions for all nine cells, in index order.
    pub fn cells(&self) -> [CellView; 9] {
        Position::ALL.map(|position| {
            let highlight = match &self.status {
                GameStatus::InProgress => Highlight::None,
                GameStatus::Draw => Highlight::Draw,
                GameStatus::Won { lines, .. } => {
                    if lines.iter().any(|line| line.contains(position)) {
                        Highlight::WinningLine
                    } else {
                        Highlight::None
                    }
                }
            };
            CellView {
                position,
                mark: self.board.get(position).mark(),
                highlight,
            }
        })
    }
}

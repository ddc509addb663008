//! Core domain types for noughts and crosses.

use super::position::Position;
use super::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// The symbol a player places in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross, "X". Always moves first.
    Cross,
    /// Nought, "O".
    Nought,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the symbol drawn on the board.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Cross => "X",
            Mark::Nought => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 board in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Overwrites the cell at a position.
    ///
    /// Only the engine and the invariant checks write to a board;
    /// presentation code only ever sees snapshots.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Formats the board as text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => result.push_str(&(idx + 1).to_string()),
                    Cell::Marked(mark) => result.push_str(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// `mark` completed every line in `lines` (at least one).
    Won {
        /// The winning mark.
        mark: Mark,
        /// Every completed line, in table order.
        lines: Vec<WinningLine>,
    },
    /// Board full, no line completed.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed lines; empty unless the game is won.
    pub fn winning_lines(&self) -> &[WinningLine] {
        match self {
            GameStatus::Won { lines, .. } => lines,
            _ => &[],
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { mark, .. } => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::Cross.opponent(), Mark::Nought);
        assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Marked(Mark::Cross));
        board.set(Position::BottomRight, Cell::Marked(Mark::Nought));
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_count_marks() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Mark::Cross));
        board.set(Position::TopRight, Cell::Marked(Mark::Cross));
        board.set(Position::Center, Cell::Marked(Mark::Nought));
        assert_eq!(board.count(Mark::Cross), 2);
        assert_eq!(board.count(Mark::Nought), 1);
    }
}

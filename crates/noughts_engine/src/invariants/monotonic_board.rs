//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Cell, GameEngine};

/// Invariant: replaying the move list never overwrites a cell and
/// reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.moves() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Marked(mov.mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 8, 2] {
            engine.select_cell(index).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = GameEngine::new();
        engine.select_cell(4).unwrap();
        engine.moves.push(Move::new(Mark::Nought, Position::Center));
        engine
            .board
            .set(Position::Center, Cell::Marked(Mark::Nought));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = GameEngine::new();
        engine
            .board
            .set(Position::TopLeft, Cell::Marked(Mark::Cross));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}

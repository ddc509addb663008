//! Alternating turn invariant: Cross, Nought, Cross, ...

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: moves alternate starting with Cross, and the mark to move
/// is the opponent of the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let moves = engine.moves();

        let Some(first) = moves.first() else {
            return engine.to_move() == Mark::Cross;
        };
        if first.mark != Mark::Cross {
            return false;
        }

        if moves.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected_next = if moves.len() % 2 == 0 {
            Mark::Cross
        } else {
            Mark::Nought
        };
        engine.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

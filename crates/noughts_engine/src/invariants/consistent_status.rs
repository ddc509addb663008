//! Status consistency invariant.

use super::Invariant;
use crate::{GameEngine, engine::evaluate};

/// Invariant: the stored status is what the rules compute from the board.
pub struct ConsistentStatusInvariant;

impl Invariant<GameEngine> for ConsistentStatusInvariant {
    fn holds(engine: &GameEngine) -> bool {
        evaluate(engine.board()) == *engine.status()
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

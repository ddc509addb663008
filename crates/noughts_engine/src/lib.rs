//! Noughts and crosses game logic.
//!
//! The crate is a pure state machine with no I/O beyond `tracing` events.
//! Presentation layers feed cell selections into a [`GameEngine`] and
//! render the [`Snapshot`] that comes back.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, Mark, SelectionEffect};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.select_cell(index)?;
//! }
//! let result = engine.select_cell(2)?;
//! assert_eq!(result.effect.mark(), Some(Mark::Cross));
//! assert_eq!(result.snapshot.status.winner(), Some(Mark::Cross));
//!
//! // Any selection after the game ends starts a new one.
//! let result = engine.select_cell(8)?;
//! assert_eq!(result.effect, SelectionEffect::Restarted);
//! # Ok::<(), noughts_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod render;
pub mod rules;
mod types;

pub use action::{EngineError, Move, SelectionEffect};
pub use engine::{GameEngine, MoveResult, Snapshot, evaluate};
pub use position::Position;
pub use render::{CellView, Highlight};
pub use rules::{LineKind, WINNING_LINES, WinningLine};
pub use types::{Board, Cell, GameStatus, Mark};

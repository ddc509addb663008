//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the engine so invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LineKind, WINNING_LINES, WinningLine, winning_lines};

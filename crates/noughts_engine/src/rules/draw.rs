//! Draw detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board with no winning line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

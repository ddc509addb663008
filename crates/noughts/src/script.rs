//! Headless play: feed a list of cell indices to the engine.

use anyhow::{Context, Result};
use noughts_engine::{GameEngine, GameStatus, Snapshot};
use tracing::{debug, instrument};

/// Output format of a scripted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board drawing plus a status line.
    #[default]
    Text,
    /// The final snapshot as pretty JSON.
    Json,
}

/// Plays `indices` in order on a fresh engine and returns the final state.
///
/// # Errors
///
/// Fails on the first out-of-range index.
#[instrument]
pub fn play_script(indices: &[i64]) -> Result<Snapshot> {
    let mut engine = GameEngine::new();
    for (turn, index) in indices.iter().enumerate() {
        let result = engine
            .select_cell(*index)
            .with_context(|| format!("Selection {} ({}) rejected", turn + 1, index))?;
        debug!(turn, index, effect = ?result.effect, "Scripted selection");
    }
    Ok(engine.snapshot())
}

/// Formats a snapshot for printing.
pub fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
        }
        OutputFormat::Text => {
            let status = match &snapshot.status {
                GameStatus::InProgress => format!("In progress, {} to move", snapshot.to_move),
                GameStatus::Won { mark, lines } => {
                    let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
                    format!("{} wins on {}", mark, lines.join(" and "))
                }
                GameStatus::Draw => "Draw".to_string(),
            };
            Ok(format!("{}\n\n{}", snapshot.board.display(), status))
        }
    }
}

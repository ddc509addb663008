//! Application state and logic.

use crate::input::{self, Action};
use noughts_engine::{GameEngine, GameStatus, MoveResult, Position, SelectionEffect, Snapshot};
use tracing::{debug, instrument};

/// Main application state.
///
/// Owns the only [`GameEngine`]; every call into it comes from the UI
/// event loop.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let engine = GameEngine::new();
        let status_message = turn_message(&engine.snapshot());
        Self {
            engine,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Returns a copy of the engine state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a key action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(position) => {
                self.cursor = position;
                self.select(position);
            }
            Action::SelectCursor => {
                self.select(self.cursor);
            }
            Action::MoveCursor(key) => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            Action::NewGame => self.new_game(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Selects a cell and updates the status line.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> SelectionEffect {
        let MoveResult { effect, snapshot } = self.engine.select(position);
        self.status_message = match effect {
            SelectionEffect::Placed { mark, position } => match &snapshot.status {
                GameStatus::InProgress => {
                    format!("{} played {}. {}", mark, position, turn_message(&snapshot))
                }
                GameStatus::Won { mark, .. } => {
                    format!("{} wins! Select any cell or press N to play again.", mark)
                }
                GameStatus::Draw => {
                    "Draw! Select any cell or press N to play again.".to_string()
                }
            },
            SelectionEffect::Ignored { position } => {
                format!("{} is taken. {}", position, turn_message(&snapshot))
            }
            SelectionEffect::Restarted => format!("New game. {}", turn_message(&snapshot)),
        };
        debug!(?effect, status = %self.status_message, "Selection handled");
        effect
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let snapshot = self.engine.reset();
        self.status_message = format!("New game. {}", turn_message(&snapshot));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn turn_message(snapshot: &Snapshot) -> String {
    format!("{} to move.", snapshot.to_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::Mark;

    #[test]
    fn test_new_app_prompts_cross() {
        let app = App::new();
        assert_eq!(app.status_message(), "X to move.");
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_select_updates_status() {
        let mut app = App::new();
        let effect = app.select(Position::Center);
        assert_eq!(effect.mark(), Some(Mark::Cross));
        assert_eq!(app.status_message(), "X played Center. O to move.");
    }

    #[test]
    fn test_taken_cell_message() {
        let mut app = App::new();
        app.select(Position::Center);
        app.select(Position::Center);
        assert_eq!(app.status_message(), "Center is taken. O to move.");
    }
}

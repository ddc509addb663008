//! Terminal client configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal client, loaded from TOML.
///
/// Every field is optional in the file. Colors accept ratatui color
/// names (`"blue"`, `"lightcyan"`) or hex (`"#ffa500"`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// File receiving log output while the board is on screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Color of X marks.
    #[serde(default = "default_cross_color")]
    cross_color: String,

    /// Color of O marks.
    #[serde(default = "default_nought_color")]
    nought_color: String,

    /// Background of ordinary cells.
    #[serde(default = "default_cell_color")]
    cell_color: String,

    /// Background of cells on a completed line.
    #[serde(default = "default_win_color")]
    win_color: String,

    /// Background of every cell after a draw.
    #[serde(default = "default_draw_color")]
    draw_color: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_cross_color() -> String {
    "blue".to_string()
}

fn default_nought_color() -> String {
    "red".to_string()
}

fn default_cell_color() -> String {
    "gray".to_string()
}

fn default_win_color() -> String {
    "cyan".to_string()
}

fn default_draw_color() -> String {
    "#ffa500".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            cross_color: default_cross_color(),
            nought_color: default_nought_color(),
            cell_color: default_cell_color(),
            win_color: default_win_color(),
            draw_color: default_draw_color(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolves the color names into a [`Theme`].
    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            cross: parse_color("cross_color", &self.cross_color)?,
            nought: parse_color("nought_color", &self.nought_color)?,
            cell: parse_color("cell_color", &self.cell_color)?,
            win: parse_color("win_color", &self.win_color)?,
            draw: parse_color("draw_color", &self.draw_color)?,
        })
    }
}

#[track_caller]
fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Unknown color {:?} for {}", value, field)))
}

/// Resolved colors used by the board renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// X mark foreground.
    pub cross: Color,
    /// O mark foreground.
    pub nought: Color,
    /// Ordinary cell background.
    pub cell: Color,
    /// Winning line background.
    pub win: Color,
    /// Draw background.
    pub draw: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cross: Color::Blue,
            nought: Color::Red,
            cell: Color::Gray,
            win: Color::Cyan,
            draw: Color::Rgb(0xff, 0xa5, 0x00),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

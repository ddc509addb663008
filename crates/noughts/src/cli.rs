//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts and crosses for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Play a list of cell indices (0-8, row-major) and print the result
    Script {
        /// Cell indices in play order
        #[arg(required = true, allow_negative_numbers = true)]
        moves: Vec<i64>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the command to run, with `play` as the default.
    pub fn command(self) -> Command {
        self.command
            .unwrap_or(Command::Play { config: None })
    }
}

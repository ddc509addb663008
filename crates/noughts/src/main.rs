//! noughts - two-player noughts and crosses.

use anyhow::Result;
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::script::{self, OutputFormat};
use noughts::{Config, logging, tui};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    match Cli::parse().command() {
        Command::Play { config } => {
            let config = Config::load(config.as_deref())?;
            tui::run_tui(&config)
        }
        Command::Script { moves, json } => {
            logging::init_stderr();
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            let snapshot = script::play_script(&moves)?;
            println!("{}", script::render(&snapshot, format)?);
            Ok(())
        }
    }
}

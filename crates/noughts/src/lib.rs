//! Terminal front end for the noughts engine.
//!
//! - **App**: owns the engine, cursor and status line
//! - **UI**: ratatui rendering of engine snapshots
//! - **Script**: headless runs for quick checks and tooling
//! - **Config**: optional TOML theme and log settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod script;
pub mod tui;
pub mod ui;

pub use app::App;
pub use config::{Config, ConfigError, Theme};

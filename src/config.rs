//! Command-line configuration.
//!
//! ```text
//! tui-2048 [SPAWN_TABLE] [SIZE] [--seed N] [--log-file PATH] [--log FILTER]
//! ```
//!
//! - `SPAWN_TABLE`: literal mapping of tile to weight, default `{1: 3, 4: 1}`
//! - `SIZE`: `ROWSxCOLS`, default `4x4`
//!
//! Environment variables:
//!
//! - `TUI_2048_LOG_PATH`: same as `--log-file`
//! - `TUI_2048_LOG`: same as `--log` (default "info")

use std::path::PathBuf;

use clap::Parser;

use crate::core::{parse_size, ConfigError, GameSettings, SpawnTable};
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Args {
    /// Spawn weights as a literal mapping, e.g. "{1: 3, 4: 1}".
    pub spawn_table: Option<String>,
    /// Board size as ROWSxCOLS, e.g. "4x4".
    pub size: Option<String>,
    /// Seed for a reproducible game (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Append logs to this file. Nothing is logged without it.
    #[arg(long, env = "TUI_2048_LOG_PATH")]
    pub log_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "debug", "tui_2048_core=trace".
    #[arg(long, env = "TUI_2048_LOG", default_value = "info")]
    pub log: String,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub settings: GameSettings,
    pub seed: u64,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    /// Validate `args`, drawing a fresh seed when none is given.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let spawn_table = match args.spawn_table.as_deref() {
            Some(text) => SpawnTable::parse(text)?,
            None => SpawnTable::default(),
        };
        let (rows, cols) = match args.size.as_deref() {
            Some(text) => parse_size(text)?,
            None => (DEFAULT_ROWS, DEFAULT_COLS),
        };

        Ok(Self {
            settings: GameSettings::new(rows, cols, spawn_table)?,
            seed: args.seed.unwrap_or_else(rand::random),
            log_file: args
                .log_file
                .filter(|p| !p.as_os_str().is_empty()),
            log_filter: args.log,
        })
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and state management. It has **no dependencies**
//! on terminal input, rendering, or process setup, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Board states can be built directly and moves checked cell by cell
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid of tiles with full/game-over checks and signatures
//! - [`moves`]: directional slide/merge engine with scoring
//! - [`spawn`]: weighted spawn table and random tile placement
//! - [`settings`]: validated startup configuration
//! - [`game_state`]: one game: board, score, RNG and play/game-over status
//! - [`render_gate`]: last-rendered signature tracking
//!
//! # Game Rules
//!
//! - A move pushes every tile toward one edge; equal neighbours merge into their sum
//! - Each merge scores the value of the tile it creates
//! - A move that changes the board is followed by one spawned tile
//! - The game ends when the board is full and no two adjacent tiles are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameSettings, GameState};
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(GameSettings::default(), 12345).unwrap();
//! game.start();
//! assert_eq!(game.board().empty_count(), 14);
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert_eq!(game.score(), outcome.points);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod render_gate;
pub mod settings;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::ConfigError;
pub use game_state::{GameState, GameStatus, MoveOutcome};
pub use moves::{apply_move, MoveResult};
pub use render_gate::RenderGate;
pub use settings::{parse_size, GameSettings};
pub use spawn::{add_random_tile, SpawnTable, SpawnWeight, SpawnedTile};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a rectangular grid of `rows x cols` tiles:
//!
//! - **Default**: 4 rows x 4 columns
//! - **Limits**: 1..=32 in each dimension
//! - **Coordinates**: `(row, col)` with `(0, 0)` at the top-left corner
//!
//! # Spawn Weights
//!
//! New tiles are drawn from a weighted table. The default table is:
//!
//! | Tile | Weight | Probability |
//! |------|--------|-------------|
//! | 1    | 3      | 75%         |
//! | 4    | 1      | 25%         |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(!dir.is_vertical());
//! assert_eq!(dir.sign(), -1);
//!
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLS), (4, 4));
//! ```

/// A tile value. `0` is an empty cell.
pub type Tile = u64;

/// The empty tile.
pub const EMPTY: Tile = 0;

/// Default number of board rows.
pub const DEFAULT_ROWS: usize = 4;

/// Default number of board columns.
pub const DEFAULT_COLS: usize = 4;

/// Largest accepted row or column count.
pub const MAX_DIM: usize = 32;

/// Maximum number of entries in a spawn table.
pub const MAX_SPAWN_ENTRIES: usize = 16;

/// Largest tile a spawn table may list. Merged tiles grow past it freely.
pub const MAX_SPAWN_TILE: Tile = u32::MAX as Tile;

/// Default spawn weights as `(tile, weight)` in selection order.
pub const DEFAULT_SPAWN_WEIGHTS: [(Tile, f64); 2] = [(1, 3.0), (4, 1.0)];

/// Number of tiles placed before the first move.
pub const INITIAL_TILES: usize = 2;


/// The four directions a move can push tiles toward.
///
/// - **Up**: toward row 0
/// - **Down**: toward the last row
/// - **Left**: toward column 0
/// - **Right**: toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves along columns (up/down).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Step taken along the moving axis: `+1` toward the last index, `-1` toward 0.
    pub fn sign(&self) -> isize {
        match self {
            Direction::Down | Direction::Right => 1,
            Direction::Up | Direction::Left => -1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

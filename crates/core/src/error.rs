//! Errors raised while validating game configuration.

use crate::types::{Tile, MAX_DIM, MAX_SPAWN_ENTRIES, MAX_SPAWN_TILE};

/// Errors that can occur when building a board or a spawn table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be between 1 and {max}, got {rows}x{cols}", max = MAX_DIM)]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("board rows must all have {expected} columns, row {row} has {found}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("malformed board size {0:?} (expected ROWSxCOLS, e.g. 4x4)")]
    MalformedSize(String),

    #[error("spawn table is empty")]
    EmptySpawnTable,

    #[error("spawn table has more than {max} entries", max = MAX_SPAWN_ENTRIES)]
    TooManySpawnEntries,

    #[error("spawn weight for tile {tile} must be a positive number, got {weight}")]
    InvalidWeight { tile: Tile, weight: f64 },

    #[error("spawn table cannot contain the empty tile 0")]
    ZeroTile,

    #[error("spawn tile {0} exceeds the largest spawnable tile {max}", max = MAX_SPAWN_TILE)]
    TileTooLarge(Tile),

    #[error("spawn table lists tile {0} more than once")]
    DuplicateTile(Tile),

    #[error("malformed spawn table entry {0:?} (expected TILE: WEIGHT)")]
    MalformedSpawnEntry(String),

    #[error("malformed spawn table {0:?} (expected {{TILE: WEIGHT, ...}})")]
    MalformedSpawnTable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDimensions { rows: 0, cols: 4 };
        assert_eq!(
            err.to_string(),
            "board dimensions must be between 1 and 32, got 0x4"
        );

        let err = ConfigError::InvalidWeight {
            tile: 2,
            weight: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "spawn weight for tile 2 must be a positive number, got -1"
        );
    }
}

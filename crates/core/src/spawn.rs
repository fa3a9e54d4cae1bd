//! Spawn module - weighted random tile placement
//!
//! A [`SpawnTable`] is an ordered list of `(tile, weight)` pairs defining a discrete
//! distribution: each tile appears with probability `weight / total`. Entry order is
//! part of the table and fixes the order of the selection walk, so a seeded RNG always
//! reproduces the same sequence of spawns.
//!
//! Tile placement uses rejection sampling: random `(row, col)` pairs are drawn until one
//! lands on an empty cell.

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::trace;

use crate::board::Board;
use crate::error::ConfigError;
use crate::types::{Tile, DEFAULT_SPAWN_WEIGHTS, EMPTY, MAX_SPAWN_ENTRIES, MAX_SPAWN_TILE};

/// One entry of a spawn table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnWeight {
    pub tile: Tile,
    pub weight: f64,
}

/// Validated, read-only spawn distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTable {
    entries: ArrayVec<SpawnWeight, MAX_SPAWN_ENTRIES>,
    total: f64,
}

/// A tile placed by the spawn generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub tile: Tile,
}

impl SpawnTable {
    /// Build a table from `(tile, weight)` pairs, keeping their order.
    ///
    /// Rejects an empty table, the empty tile, tiles above [`MAX_SPAWN_TILE`], duplicate
    /// tiles, and weights that are not finite and strictly positive.
    pub fn new<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Tile, f64)>,
    {
        let mut entries: ArrayVec<SpawnWeight, MAX_SPAWN_ENTRIES> = ArrayVec::new();
        let mut total = 0.0;

        for (tile, weight) in pairs {
            if tile == EMPTY {
                return Err(ConfigError::ZeroTile);
            }
            if tile > MAX_SPAWN_TILE {
                return Err(ConfigError::TileTooLarge(tile));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidWeight { tile, weight });
            }
            if entries.iter().any(|e| e.tile == tile) {
                return Err(ConfigError::DuplicateTile(tile));
            }
            entries
                .try_push(SpawnWeight { tile, weight })
                .map_err(|_| ConfigError::TooManySpawnEntries)?;
            total += weight;
        }

        if entries.is_empty() {
            return Err(ConfigError::EmptySpawnTable);
        }

        Ok(Self { entries, total })
    }

    /// Parse a literal mapping such as `{1: 3, 4: 1}` or `{2: 0.9, 4: 0.1}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::SpawnTable;
    ///
    /// let table = SpawnTable::parse("{2: 9, 4: 1}").unwrap();
    /// assert_eq!(table.tiles().collect::<Vec<_>>(), vec![2, 4]);
    /// assert!((table.probability(4) - 0.1).abs() < 1e-12);
    ///
    /// assert!(SpawnTable::parse("{}").is_err());
    /// assert!(SpawnTable::parse("{2: -1}").is_err());
    /// assert!(SpawnTable::parse("{1: 3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        let body = match (trimmed.strip_prefix('{'), trimmed.ends_with('}')) {
            (Some(inner), true) => &inner[..inner.len() - 1],
            (None, false) => trimmed,
            _ => return Err(ConfigError::MalformedSpawnTable(trimmed.to_string())),
        };

        let mut pairs = Vec::new();
        for raw in body.split(',') {
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }
            let malformed = || ConfigError::MalformedSpawnEntry(entry.to_string());
            let (tile, weight) = entry.split_once(':').ok_or_else(malformed)?;
            let tile: Tile = tile.trim().parse().map_err(|_| malformed())?;
            let weight: f64 = weight.trim().parse().map_err(|_| malformed())?;
            pairs.push((tile, weight));
        }

        Self::new(pairs)
    }

    pub fn entries(&self) -> &[SpawnWeight] {
        &self.entries
    }

    /// Tiles in selection order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.entries.iter().map(|e| e.tile)
    }

    /// Normalized probability of `tile` (0 when absent).
    pub fn probability(&self, tile: Tile) -> f64 {
        self.entries
            .iter()
            .find(|e| e.tile == tile)
            .map(|e| e.weight / self.total)
            .unwrap_or(0.0)
    }

    /// Select the tile for a uniform draw in `[0, 1)`.
    ///
    /// Walks the entries in order, subtracting each normalized weight from the draw
    /// until the remainder falls inside an entry. Returns None for a draw outside
    /// `[0, 1)` (including NaN).
    pub fn select(&self, draw: f64) -> Option<Tile> {
        if !(0.0..1.0).contains(&draw) {
            return None;
        }

        let mut remaining = draw;
        for entry in &self.entries {
            let share = entry.weight / self.total;
            if remaining < share {
                return Some(entry.tile);
            }
            remaining -= share;
        }

        // Rounding in the shares can leave a sliver past the last entry.
        self.entries.last().map(|e| e.tile)
    }

    /// Draw a tile from the distribution.
    ///
    /// # Panics
    ///
    /// Panics if `rng` yields a draw outside `[0, 1)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let draw: f64 = rng.gen();
        match self.select(draw) {
            Some(tile) => tile,
            None => panic!(
                "spawn draw {draw} outside [0, 1) (total weight {})",
                self.total
            ),
        }
    }
}

impl Default for SpawnTable {
    fn default() -> Self {
        let entries = DEFAULT_SPAWN_WEIGHTS
            .iter()
            .map(|&(tile, weight)| SpawnWeight { tile, weight })
            .collect();
        let total = DEFAULT_SPAWN_WEIGHTS.iter().map(|&(_, w)| w).sum();
        Self { entries, total }
    }
}

/// Place one tile drawn from `table` on a random empty cell.
///
/// No-op (returns None) when the board is full.
pub fn add_random_tile<R: Rng + ?Sized>(
    board: &mut Board,
    table: &SpawnTable,
    rng: &mut R,
) -> Option<SpawnedTile> {
    if board.is_full() {
        return None;
    }

    let tile = table.sample(rng);
    loop {
        let row = rng.gen_range(0..board.rows());
        let col = rng.gen_range(0..board.cols());
        if board.is_empty_at(row, col) {
            board.set(row, col, tile);
            trace!(row, col, tile, "spawned tile");
            return Some(SpawnedTile { row, col, tile });
        }
    }
}

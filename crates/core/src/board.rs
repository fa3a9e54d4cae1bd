//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each cell holds a tile value, `0` meaning empty.
//! Uses a flat vector in row-major order for cache locality; the dimensions are fixed at
//! construction and never change for the lifetime of a game.
//! Coordinates: `(row, col)` where row grows downward and col grows rightward.


use crate::error::ConfigError;
use crate::types::{Tile, EMPTY, MAX_DIM};

/// The game board - `rows x cols` tiles using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of tiles, row-major order (row * cols + col)
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Rejects zero dimensions and anything above [`MAX_DIM`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        })
    }

    /// Build a board from nested rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.get(1, 1), Some(4));
    /// assert_eq!(board.get(2, 0), None);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut board = Self::new(height, width)?;

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ConfigError::RaggedRows {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            let start = r * width;
            board.cells[start..start + width].copy_from_slice(&row);
        }

        Ok(board)
    }

    /// Convert to nested rows (for tests and display).
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get tile at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at `(row, col)`.
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// Flat row-major view of all tiles.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// Row-major serialization used only to detect change between two board states.
    ///
    /// Cells are separated by `,` and rows by `/`, so two boards share a signature
    /// exactly when every cell matches.
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(vec![vec![1, 11], vec![0, 2]]).unwrap();
    /// assert_eq!(board.stringify(), "1,11/0,2");
    /// ```
    pub fn stringify(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3);
        for (i, tile) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(if i % self.cols == 0 { '/' } else { ',' });
            }
            out.push_str(&tile.to_string());
        }
        out
    }

    /// True iff every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&t| t != EMPTY)
    }

    /// True iff the board is full and no two orthogonally adjacent tiles are equal.
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        let horizontal_pair = self
            .cells
            .chunks(self.cols)
            .any(|row| row.windows(2).any(|w| w[0] == w[1]));
        if horizontal_pair {
            return false;
        }

        // A window of cols + 1 spans from (r, c) to the cell directly below it.
        let vertical_pair = self
            .cells
            .windows(self.cols + 1)
            .any(|w| w[0] == w[self.cols]);
        !vertical_pair
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t == EMPTY).count()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tiles.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().sum()
    }
}

//! Move engine - slides and merges tiles toward one edge of the board.
//!
//! Each line (a row for left/right, a column for up/down) is scanned starting at the
//! edge the move points toward and walking back to the opposite edge. Every cell in the
//! scan is pushed one step at a time toward the far edge:
//!
//! - into an empty neighbour: the tile slides and keeps going
//! - into an equal neighbour: the two merge, the result is scored, and the merged
//!   tile keeps going from its new position
//! - otherwise (different tile, or the board edge): the tile stops
//!
//! Because a merged tile keeps advancing, it can merge again within the same scan.
//! `[2, 2, 4]` moved left becomes `[8, 0, 0]` and scores `4 + 8`. Classic 2048 lets each
//! tile merge at most once per move; this engine does not.
//!
//! Scan order is load-bearing: cells nearer the far edge settle first, so a tile that
//! has already moved is never visited twice in one pass.

use tracing::trace;

use crate::board::Board;
use crate::types::{Direction, Tile, EMPTY};

/// Result of applying one move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Sum of the values of every tile created by a merge during the move.
    pub points: u64,
    /// Whether any cell differs from the board before the move.
    pub changed: bool,
}

/// Per-direction traversal descriptor, computed once per move.
#[derive(Debug, Clone, Copy)]
struct Sweep {
    /// Number of independent lines.
    lines: usize,
    /// Number of cells per line.
    len: usize,
    /// Flat-index distance between consecutive lines.
    line_stride: usize,
    /// Flat-index distance between consecutive cells in a line.
    pos_stride: usize,
    /// True when tiles travel toward the last index of the line.
    forward: bool,
}

impl Sweep {
    fn new(dir: Direction, rows: usize, cols: usize) -> Self {
        if dir.is_vertical() {
            Self {
                lines: cols,
                len: rows,
                line_stride: 1,
                pos_stride: cols,
                forward: dir.sign() > 0,
            }
        } else {
            Self {
                lines: rows,
                len: cols,
                line_stride: cols,
                pos_stride: 1,
                forward: dir.sign() > 0,
            }
        }
    }

    #[inline(always)]
    fn index(&self, line: usize, pos: usize) -> usize {
        line * self.line_stride + pos * self.pos_stride
    }

    /// The `step`-th position of the scan, starting at the far edge.
    #[inline(always)]
    fn scan_pos(&self, step: usize) -> usize {
        if self.forward {
            self.len - 1 - step
        } else {
            step
        }
    }

    /// Neighbour of `pos` in the direction of travel, or None at the far edge.
    #[inline(always)]
    fn advance(&self, pos: usize) -> Option<usize> {
        if self.forward {
            (pos + 1 < self.len).then_some(pos + 1)
        } else {
            pos.checked_sub(1)
        }
    }
}

/// Collapse one line in place, returning the points scored.
fn collapse_line(cells: &mut [Tile], sweep: &Sweep, line: usize) -> u64 {
    let mut points = 0u64;

    for step in 0..sweep.len {
        let mut pos = sweep.scan_pos(step);

        while let Some(next) = sweep.advance(pos) {
            let here = sweep.index(line, pos);
            let there = sweep.index(line, next);
            let tile = cells[here];

            if tile == EMPTY {
                break;
            }

            if cells[there] == EMPTY {
                cells[there] = tile;
                cells[here] = EMPTY;
            } else if cells[there] == tile {
                let merged = tile + tile;
                cells[there] = merged;
                cells[here] = EMPTY;
                points += merged;
            } else {
                break;
            }
            pos = next;
        }
    }

    points
}

/// Apply a move to `board` in place.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{apply_move, Board};
/// use tui_2048_core::types::Direction;
///
/// let mut board = Board::from_rows(vec![vec![2, 2, 0, 0]]).unwrap();
/// let result = apply_move(&mut board, Direction::Left);
///
/// assert_eq!(board.to_rows(), vec![vec![4, 0, 0, 0]]);
/// assert_eq!(result.points, 4);
/// assert!(result.changed);
/// ```
pub fn apply_move(board: &mut Board, dir: Direction) -> MoveResult {
    let sweep = Sweep::new(dir, board.rows(), board.cols());
    let before = board.stringify();

    let cells = board.cells_mut();
    let mut points = 0u64;
    for line in 0..sweep.lines {
        points += collapse_line(cells, &sweep, line);
    }

    let changed = board.stringify() != before;
    trace!(direction = %dir, points, changed, "applied move");
    MoveResult { points, changed }
}

impl Board {
    /// Method form of [`apply_move`].
    pub fn apply_move(&mut self, dir: Direction) -> MoveResult {
        apply_move(self, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: Vec<Vec<Tile>>) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn sweep_scans_from_far_edge() {
        let right = Sweep::new(Direction::Right, 2, 4);
        assert_eq!(right.scan_pos(0), 3);
        assert_eq!(right.advance(3), None);
        assert_eq!(right.advance(1), Some(2));

        let up = Sweep::new(Direction::Up, 3, 2);
        assert_eq!(up.scan_pos(0), 0);
        assert_eq!(up.advance(0), None);
        assert_eq!(up.index(1, 2), 5);
    }

    #[test]
    fn test_slide_without_merge() {
        let mut b = board(vec![vec![0, 0, 2, 0]]);
        let r = b.apply_move(Direction::Left);
        assert_eq!(b.to_rows(), vec![vec![2, 0, 0, 0]]);
        assert_eq!(r, MoveResult { points: 0, changed: true });
    }

    #[test]
    fn test_blocked_by_different_tile() {
        let mut b = board(vec![vec![2, 4, 0, 0]]);
        let r = b.apply_move(Direction::Left);
        assert_eq!(b.to_rows(), vec![vec![2, 4, 0, 0]]);
        assert!(!r.changed);
    }

    #[test]
    fn test_merged_tile_keeps_merging() {
        let mut b = board(vec![vec![2, 2, 4, 0]]);
        let r = b.apply_move(Direction::Left);
        assert_eq!(b.to_rows(), vec![vec![8, 0, 0, 0]]);
        assert_eq!(r.points, 12);
    }

    #[test]
    fn test_four_equal_tiles_chain_right() {
        // 2+2 at the far edge, then 2+2 behind it, then 4+4.
        let mut b = board(vec![vec![2, 2, 2, 2]]);
        let r = b.apply_move(Direction::Right);
        assert_eq!(b.to_rows(), vec![vec![0, 0, 0, 8]]);
        assert_eq!(r.points, 16);
    }

    #[test]
    fn test_vertical_moves_use_columns() {
        let mut b = board(vec![vec![2, 0], vec![0, 4], vec![2, 4]]);
        let r = b.apply_move(Direction::Down);
        assert_eq!(b.to_rows(), vec![vec![0, 0], vec![0, 0], vec![4, 8]]);
        assert_eq!(r.points, 12);

        let r = b.apply_move(Direction::Up);
        assert_eq!(b.to_rows(), vec![vec![4, 8], vec![0, 0], vec![0, 0]]);
        assert_eq!(r, MoveResult { points: 0, changed: true });
    }

    #[test]
    fn test_large_tiles_merge_exactly() {
        let big = crate::types::MAX_SPAWN_TILE;
        let mut b = board(vec![vec![big, big, 0], vec![1 << 31, 0, 1 << 31]]);
        let before = b.tile_sum();

        let r = b.apply_move(Direction::Left);
        assert_eq!(b.to_rows(), vec![vec![2 * big, 0, 0], vec![1 << 32, 0, 0]]);
        assert_eq!(r.points, 2 * big + (1 << 32));
        assert_eq!(b.tile_sum(), before);
    }

    #[test]
    fn test_single_cell_board_never_changes() {
        let mut b = board(vec![vec![2]]);
        for dir in Direction::ALL {
            assert_eq!(b.apply_move(dir), MoveResult::default());
        }
    }
}

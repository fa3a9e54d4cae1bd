//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, EMPTY};

/// Minimum tile field width in terminal columns.
const MIN_TILE_W: u16 = 4;

const HINT: &str = "arrows/wasd/hjkl move, q quits";
const GAME_OVER: &str = "GAME OVER";

/// Background colors by tile rank (`log2(tile)`), wrapping for huge tiles.
const TILE_BG: [Rgb; 12] = [
    Rgb::new(205, 193, 180),
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Fixed-width grid renderer for the 2048 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    colored: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { colored: true }
    }
}

impl GameView {
    /// Plain view: default style everywhere.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Width of one tile field for `board`: wide enough for its largest tile.
    pub fn tile_width(board: &Board) -> u16 {
        let digits = board.highest_tile().to_string().len() as u16;
        digits.max(MIN_TILE_W)
    }

    /// Framebuffer size needed for `board`.
    pub fn frame_size(board: &Board) -> (u16, u16) {
        let grid_w = 1 + board.cols() as u16 * (Self::tile_width(board) + 1);
        let grid_h = 2 * board.rows() as u16 + 1;
        let w = grid_w.max(HINT.len() as u16);
        // Grid, then score line, then status line.
        (w, grid_h + 2)
    }

    /// Render the game into `fb`, resizing it to fit.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        let board = game.board();
        let (w, h) = Self::frame_size(board);
        fb.reset(w, h);

        let tile_w = Self::tile_width(board);
        let grid_w = 1 + board.cols() as u16 * (tile_w + 1);
        let line = CellStyle::default();

        for r in 0..board.rows() {
            let y = 2 * r as u16;
            draw_rule(fb, y, grid_w, line);

            let y = y + 1;
            fb.put_char(0, y, '|', line);
            for c in 0..board.cols() {
                let x = 1 + c as u16 * (tile_w + 1);
                let tile = board.get(r, c).unwrap_or(EMPTY);
                let label = if tile == EMPTY {
                    String::new()
                } else {
                    tile.to_string()
                };
                fb.put_str_centered(x, y, tile_w, &label, self.tile_style(tile));
                fb.put_char(x + tile_w, y, '|', line);
            }
        }
        let grid_h = 2 * board.rows() as u16;
        draw_rule(fb, grid_h, grid_w, line);

        fb.put_str(0, grid_h + 1, &format!("Score: {}", game.score()), line.bold());

        if game.is_game_over() {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(0, grid_h + 2, GAME_OVER, style);
        } else {
            let style = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
            fb.put_str(0, grid_h + 2, HINT, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(game, &mut fb);
        fb
    }

    fn tile_style(&self, tile: Tile) -> CellStyle {
        if !self.colored {
            return CellStyle::default();
        }
        if tile == EMPTY {
            return CellStyle::new(DARK_TEXT, TILE_BG[0]);
        }
        let rank = tile.ilog2() as usize;
        let bg = TILE_BG[1 + rank % (TILE_BG.len() - 1)];
        let fg = if rank < 3 { DARK_TEXT } else { LIGHT_TEXT };
        CellStyle::new(fg, bg).bold()
    }
}

fn draw_rule(fb: &mut FrameBuffer, y: u16, w: u16, style: CellStyle) {
    for x in 0..w {
        fb.put_char(x, y, '-', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpawnTable;

    fn game(rows: Vec<Vec<Tile>>) -> GameState {
        GameState::from_board(Board::from_rows(rows).unwrap(), SpawnTable::default(), 1)
    }

    #[test]
    fn renders_fixed_width_grid() {
        let g = game(vec![vec![2, 0], vec![0, 1024]]);
        let fb = GameView::plain().render(&g);

        assert_eq!(fb.row_text(0).trim_end(), "-----------");
        assert_eq!(fb.row_text(1).trim_end(), "| 2  |    |");
        assert_eq!(fb.row_text(3).trim_end(), "|    |1024|");
        assert_eq!(fb.row_text(4).trim_end(), "-----------");
        assert_eq!(fb.row_text(5).trim_end(), "Score: 0");
        assert_eq!(fb.row_text(6).trim_end(), HINT);
    }

    #[test]
    fn widens_fields_for_large_tiles() {
        let g = game(vec![vec![16384, 2]]);
        assert_eq!(GameView::tile_width(g.board()), 5);

        let fb = GameView::plain().render(&g);
        assert_eq!(fb.row_text(1).trim_end(), "|16384|  2  |");
    }

    #[test]
    fn shows_game_over() {
        let g = game(vec![vec![2, 4], vec![4, 2]]);
        assert!(g.is_game_over());

        let fb = GameView::default().render(&g);
        assert_eq!(fb.row_text(6).trim_end(), GAME_OVER);
    }

    #[test]
    fn tile_colors_depend_on_rank() {
        let view = GameView::default();
        assert_ne!(view.tile_style(2), view.tile_style(4));
        assert_eq!(view.tile_style(EMPTY).bg, TILE_BG[0]);
        assert_eq!(view.tile_style(2).fg, DARK_TEXT);
        assert_eq!(view.tile_style(2048).fg, LIGHT_TEXT);
    }
}

//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The board is drawn into a
//! simple framebuffer (pure, testable), which the renderer then flushes to the
//! terminal as a full redraw or as a diff against the previous frame.
//!
//! The layout is a fixed-width grid:
//!
//! ```text
//! ---------------------
//! | 1  |    |    | 4  |
//! ---------------------
//! ...
//! Score: 0
//! ```

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

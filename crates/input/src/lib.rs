//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Direction`] moves and reads one
//! logical input event at a time. Raw mode is held only while a read is in progress
//! and is released on every exit path by [`RawModeGuard`].

pub mod map;
pub mod reader;

pub use tui_2048_types as types;

pub use map::{direction_for_key, is_interrupt};
pub use reader::{classify, next_input_from, wait_for_input, InputEvent, RawModeGuard};

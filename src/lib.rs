//! Terminal 2048 (workspace facade crate).
//!
//! The engine, input, and rendering live in dedicated crates under `crates/`; this
//! package re-exports them as `tui_2048::{core,input,term,types}` and adds the
//! application layer: command-line [`config`] and file-based [`logging`].

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

//! Terminal 2048 runner (default binary).
//!
//! Reads one direction at a time, applies it to the game, and redraws the board only
//! when its contents changed. The game runs on the alternate screen; raw mode is held
//! only while waiting for a key.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tui_2048::config::{AppConfig, Args};
use tui_2048::core::{GameState, RenderGate};
use tui_2048::input::{wait_for_input, InputEvent};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer};

/// Conventional exit status for a process stopped by Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

/// How the game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    GameOver,
    Interrupted,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_args(args).context("invalid configuration")?;
    logging::init(config.log_file.as_deref(), &config.log_filter)?;

    info!(
        rows = config.settings.rows,
        cols = config.settings.cols,
        spawn_table = ?config.settings.spawn_table.entries(),
        seed = config.seed,
        "starting game"
    );

    let mut game = GameState::new(config.settings, config.seed)?;
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Exit::GameOver => {
            for line in final_summary(&game) {
                println!("{line}");
            }
            Ok(())
        }
        Exit::Interrupted => {
            info!(score = game.score(), moves = game.moves(), "interrupted");
            std::process::exit(EXIT_INTERRUPTED);
        }
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<Exit> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut gate = RenderGate::new();

    game.start();

    loop {
        if gate.should_render(&game.signature()) {
            view.render_into(game, &mut fb);
            term.draw(&fb)?;
        }

        if game.is_game_over() {
            return Ok(Exit::GameOver);
        }

        match wait_for_input().context("failed to read input")? {
            InputEvent::Interrupt => return Ok(Exit::Interrupted),
            InputEvent::Move(direction) => {
                game.apply_move(direction);
            }
        }
    }
}

/// Plain-text copy of the last frame, printed after leaving the alternate screen.
fn final_summary(game: &GameState) -> Vec<String> {
    let fb = GameView::plain().render(game);
    (0..fb.height())
        .map(|y| fb.row_text(y).trim_end().to_string())
        .collect()
}

//! Blocking input reader with scoped raw mode.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::trace;

use crate::map::{direction_for_key, is_interrupt};
use crate::types::Direction;

/// One logical input event for the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    /// The player asked to abort (Ctrl-C or `q`).
    Interrupt,
}

/// Raw mode held for the lifetime of the guard.
///
/// Dropping the guard restores cooked mode, including during unwinding.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Classify a terminal event. Key releases and unmapped keys yield None.
pub fn classify(event: &Event) -> Option<InputEvent> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_interrupt(*key) {
        return Some(InputEvent::Interrupt);
    }
    direction_for_key(*key).map(InputEvent::Move)
}

/// Pull events from `next` until one classifies as an [`InputEvent`].
pub fn next_input_from<F>(mut next: F) -> io::Result<InputEvent>
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        let event = next()?;
        match classify(&event) {
            Some(input) => return Ok(input),
            None => trace!(?event, "ignored input"),
        }
    }
}

/// Block until the player presses a direction key or interrupts.
///
/// Raw mode is enabled for the duration of the read only.
pub fn wait_for_input() -> io::Result<InputEvent> {
    let _raw = RawModeGuard::acquire()?;
    next_input_from(event::read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn skips_unmapped_and_release_events() {
        let mut events = vec![
            Event::FocusGained,
            key(KeyCode::Char('x'), KeyEventKind::Press),
            key(KeyCode::Left, KeyEventKind::Release),
            key(KeyCode::Up, KeyEventKind::Press),
        ]
        .into_iter();

        let input = next_input_from(|| Ok(events.next().expect("ran out of events"))).unwrap();
        assert_eq!(input, InputEvent::Move(Direction::Up));
        assert!(events.next().is_none());
    }

    #[test]
    fn interrupt_short_circuits() {
        let mut events = vec![
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            key(KeyCode::Up, KeyEventKind::Press),
        ]
        .into_iter();

        let input = next_input_from(|| Ok(events.next().expect("ran out of events"))).unwrap();
        assert_eq!(input, InputEvent::Interrupt);
    }

    #[test]
    fn read_errors_propagate() {
        let err = next_input_from(|| Err(io::Error::new(io::ErrorKind::Other, "closed")))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn repeat_counts_as_press() {
        assert_eq!(
            classify(&key(KeyCode::Char('d'), KeyEventKind::Repeat)),
            Some(InputEvent::Move(Direction::Right))
        );
    }
}

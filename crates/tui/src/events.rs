// crates/tui/src/events.rs
//! Event handling for TUI

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// No input within the tick rate
    Tick,
    /// Quit application
    Quit,
    /// Resize event
    Resize(u16, u16),
}

impl AppEvent {
    /// Maps a raw terminal event
    ///
    /// Only `Ctrl-C` quits unconditionally; a plain `q` may be text typed
    /// into the form, so the app decides what it means.
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Release => AppEvent::Tick,
            CrosstermEvent::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    AppEvent::Quit
                } else {
                    AppEvent::Key(key)
                }
            }
            CrosstermEvent::Mouse(mouse) => AppEvent::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => AppEvent::Resize(w, h),
            _ => AppEvent::Tick,
        }
    }
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// How long `next` waits for input before yielding a tick
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Polls for the next event
    pub fn next(&self) -> crate::error::TuiResult<AppEvent> {
        if event::poll(self.tick_rate)? {
            Ok(AppEvent::from_crossterm(event::read()?))
        } else {
            Ok(AppEvent::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

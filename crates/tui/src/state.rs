// crates/tui/src/state.rs
//! Presentation state that lives outside the library

use crate::theme::ThemeType;

/// Tone of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
}

/// Message shown in the status bar until the next gesture replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Should quit
    pub should_quit: bool,
    /// Index of the selected card
    pub selected: usize,
    /// Whether the key help overlay is shown
    pub show_help: bool,
    /// Status message
    pub status: Option<StatusMessage>,
    /// Theme type
    pub theme: ThemeType,
}

impl AppState {
    /// Creates a new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sets a status message
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// Clears the status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Selects the next card, stopping at the last one
    pub fn select_next(&mut self, card_count: usize) {
        if self.selected + 1 < card_count {
            self.selected += 1;
        }
    }

    /// Selects the previous card, stopping at the first one
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the selection on an existing card after the list changed
    pub fn clamp_selection(&mut self, card_count: usize) {
        self.selected = self.selected.min(card_count.saturating_sub(1));
    }

    /// Cycles to the next theme
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
    }
}

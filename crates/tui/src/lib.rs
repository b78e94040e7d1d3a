// crates/tui/src/lib.rs
//! Terminal User Interface for Shelfmark
//!
//! The library itself lives in [`Controller`]; [`view::project`] turns it into
//! a [`LibraryView`] and the [`ui`] modules draw that view with ratatui.

mod app;
pub mod controller;
mod error;
mod events;
pub mod form;
mod state;
mod theme;
pub mod ui;
pub mod view;

pub use app::App;
pub use controller::{ActionOutcome, Controller, Panel, SubmitOutcome};
pub use error::{TuiError, TuiResult};
pub use events::{AppEvent, EventHandler};
pub use form::{BookDraft, BookForm, FormField, FormIssue};
pub use state::{AppState, StatusKind, StatusMessage};
pub use theme::{Theme, ThemeType};
pub use view::{project, ActionKind, BookCard, CardAction, LibraryView, StatusClass};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use shelfmark_config::Config;
use std::io::{self, IsTerminal};

/// Main TUI application wrapper
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    restored: bool,
}

impl TuiApp {
    /// Creates and initializes a new TUI application with default settings
    pub fn new() -> TuiResult<Self> {
        Self::with_config(&Config::default())
    }

    /// Takes over the terminal and builds the app from `config`
    pub fn with_config(config: &Config) -> TuiResult<Self> {
        if !io::stdout().is_terminal() {
            return Err(TuiError::Terminal("stdout is not a terminal".to_string()));
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::with_config(config),
            restored: false,
        })
    }

    /// Runs the TUI application
    pub fn run(&mut self) -> TuiResult<()> {
        let result = self.app.run(&mut self.terminal);
        self.cleanup()?;
        result
    }

    /// Cleans up terminal state
    fn cleanup(&mut self) -> TuiResult<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

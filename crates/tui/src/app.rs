// crates/tui/src/app.rs
//! Main application logic

use crate::{
    controller::{ActionOutcome, Controller, SubmitOutcome},
    error::TuiResult,
    events::{AppEvent, EventHandler},
    form::FormField,
    state::{AppState, StatusKind},
    theme::Theme,
    ui,
    view::{BookCard, CardAction},
};
use crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use shelfmark_config::Config;

/// The main TUI application
pub struct App {
    controller: Controller,
    state: AppState,
    event_handler: EventHandler,
    theme: Theme,
}

impl App {
    /// Creates a new application with default settings
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a new application using the interface settings from `config`
    pub fn with_config(config: &Config) -> Self {
        let mut state = AppState::new();
        state.theme = config.ui.theme.into();
        state.show_help = config.ui.show_help_on_start;

        Self {
            controller: Controller::new(),
            theme: Theme::new(state.theme),
            state,
            event_handler: EventHandler::new(config.ui.tick_rate()),
        }
    }

    /// Replaces the session, e.g. to start from a pre-filled library
    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self.state.clamp_selection(self.controller.view().card_count());
        self
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Runs the application until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        while !self.state.should_quit {
            self.draw(terminal)?;
            let event = self.event_handler.next()?;
            self.handle_event(event);
        }

        Ok(())
    }

    /// Draws one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        terminal.draw(|frame| ui::render(frame, &self.controller, &self.state, &self.theme))?;
        Ok(())
    }

    /// Applies one event to the app
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key.code, key.modifiers),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Quit => self.state.quit(),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.controller.is_panel_open() {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.state.select_next(self.controller.view().card_count());
            }
            MouseEventKind::ScrollUp => {
                self.state.select_previous();
            }
            _ => {}
        }
    }

    /// Handles key events
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.state.quit();
            return;
        }

        if self.controller.is_panel_open() {
            self.handle_panel_keys(code, modifiers);
        } else if self.state.show_help {
            self.handle_help_keys(code);
        } else {
            self.handle_library_keys(code);
        }
    }

    fn handle_help_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.state.quit(),
            _ => self.state.show_help = false,
        }
    }

    /// Handles keys while the add-book panel is closed
    fn handle_library_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.state.quit(),
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.controller.open_panel();
                self.state.set_status(StatusKind::Info, "New book: Enter to save, Esc to cancel");
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select_next(self.controller.view().card_count());
            }
            KeyCode::Home | KeyCode::Char('g') => self.state.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.state.selected = self.controller.view().card_count().saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
                if let Some(action) = self.selected_action(|card| card.toggle) {
                    self.activate(action);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(action) = self.selected_action(|card| card.remove) {
                    self.activate(action);
                }
            }
            KeyCode::Char('t') => {
                self.state.next_theme();
                self.theme = Theme::new(self.state.theme);
                self.state
                    .set_status(StatusKind::Info, format!("Theme: {}", self.state.theme.name()));
            }
            _ => {}
        }
    }

    /// Handles keys while the add-book panel is open
    fn handle_panel_keys(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                self.controller.close_panel();
                self.state.set_status(StatusKind::Info, "Cancelled");
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.controller.form_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.controller.form_mut() {
                    form.focus_previous();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.controller.form_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(form) = self.controller.form_mut() {
                    if form.focus() == FormField::Read {
                        if c == ' ' || c == 'x' {
                            form.toggle_read_flag();
                        }
                    } else {
                        form.insert_char(c);
                    }
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            SubmitOutcome::Added(id) => {
                let title = self
                    .controller
                    .library()
                    .find_by_id(id)
                    .map(|book| book.title().to_string())
                    .unwrap_or_default();
                if let Some(position) = self.controller.view().position_of(id) {
                    self.state.selected = position;
                }
                self.state
                    .set_status(StatusKind::Success, format!("Added \"{}\"", title));
            }
            SubmitOutcome::Rejected(issues) => {
                let reasons = issues
                    .iter()
                    .map(|issue| issue.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                self.state.set_status(StatusKind::Warning, reasons);
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn selected_action<F>(&self, pick: F) -> Option<CardAction>
    where
        F: Fn(&BookCard) -> CardAction,
    {
        self.controller.view().card(self.state.selected).map(pick)
    }

    fn activate(&mut self, action: CardAction) {
        match self.controller.activate(action) {
            ActionOutcome::Toggled { read, .. } => {
                let text = if read { "Marked as read" } else { "Marked as unread" };
                self.state.set_status(StatusKind::Success, text);
            }
            ActionOutcome::Removed(book) => {
                self.state
                    .set_status(StatusKind::Success, format!("Removed \"{}\"", book.title()));
            }
            ActionOutcome::Missing(_) | ActionOutcome::Ignored => {}
        }
        self.state
            .clamp_selection(self.controller.view().card_count());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Panel;
    use crate::theme::ThemeType;
    use shelfmark_config::ThemeName;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_book(app: &mut App, title: &str, author: &str, pages: &str) {
        press(app, KeyCode::Char('n'));
        type_text(app, title);
        press(app, KeyCode::Tab);
        type_text(app, author);
        press(app, KeyCode::Tab);
        type_text(app, pages);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(!app.state.should_quit);
        assert_eq!(app.controller.panel(), Panel::Closed);
    }

    #[test]
    fn test_with_config() {
        let mut config = Config::default();
        config.ui.theme = ThemeName::Nord;
        config.ui.show_help_on_start = true;

        let app = App::with_config(&config);
        assert_eq!(app.state.theme, ThemeType::Nord);
        assert_eq!(app.theme.theme_type, ThemeType::Nord);
        assert!(app.state.show_help);
    }

    #[test]
    fn test_tick_rate_stays_in_bounds() {
        use std::time::Duration;

        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        let app = App::with_config(&config);
        assert_eq!(app.event_handler.tick_rate(), Duration::from_millis(50));

        config.ui.tick_rate_ms = 300;
        let app = App::with_config(&config);
        assert_eq!(app.event_handler.tick_rate(), Duration::from_millis(300));
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Quiet");

        assert!(!app.state.should_quit);
        assert_eq!(app.controller.form().title(), "Quiet");
    }

    #[test]
    fn test_add_via_keys() {
        let mut app = App::new();
        add_book(&mut app, "Dune", "Frank Herbert", "412");

        assert_eq!(app.controller.panel(), Panel::Closed);
        assert_eq!(app.controller.view().card_count(), 1);
        assert_eq!(app.state.status.as_ref().unwrap().kind, StatusKind::Success);
    }

    #[test]
    fn test_read_checkbox_via_space() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.form().read());
    }

    #[test]
    fn test_rejected_submit_reports_warning() {
        let mut app = App::new();
        add_book(&mut app, "", "Frank Herbert", "412");

        assert!(app.controller.is_panel_open());
        let status = app.state.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert!(status.text.contains("Title is required"));
    }

    #[test]
    fn test_toggle_and_remove_selected() {
        let mut app = App::new();
        add_book(&mut app, "Dune", "Frank Herbert", "412");
        add_book(&mut app, "Emma", "Jane Austen", "474");
        assert_eq!(app.state.selected, 1);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.view().cards()[0].status_label(), "Read");
        assert_eq!(app.controller.view().cards()[1].status_label(), "Not read");

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.controller.view().card_count(), 1);
        assert_eq!(app.state.selected, 0);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.controller.view().is_empty_state());

        // Nothing left to act on
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.view().is_empty_state());
    }

    #[test]
    fn test_escape_cancels_and_clears() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Half typed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.controller.panel(), Panel::Closed);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.form().title(), "");
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state.show_help);

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.state.show_help);
        assert!(!app.controller.is_panel_open());
    }

    #[test]
    fn test_theme_cycle() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.theme_type, ThemeType::Light);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state.should_quit);

        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.state.should_quit);

        let mut app = App::new();
        app.handle_event(AppEvent::Quit);
        assert!(app.state.should_quit);
    }
}

// crates/tui/src/ui/mod.rs
//! UI rendering modules

pub mod form;
pub mod help;
pub mod library;

use crate::{
    controller::Controller,
    state::{AppState, StatusKind},
    theme::Theme,
    view::StatusClass,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the main UI
pub fn render(frame: &mut Frame, controller: &Controller, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Cards
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], controller, theme);
    library::render(frame, chunks[1], controller.view(), state, theme);
    render_status_bar(frame, chunks[2], controller, state, theme);

    if controller.is_panel_open() {
        form::render(frame, frame.area(), controller.form(), theme);
    } else if state.show_help {
        help::render(frame, frame.area(), theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, controller: &Controller, theme: &Theme) {
    let view = controller.view();
    let read = view
        .cards()
        .iter()
        .filter(|card| card.status == StatusClass::Read)
        .count();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Shelfmark",
            theme.accent_style().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("{} books", view.card_count()), theme.text_style()),
        Span::styled(format!(" ({} read)", read), theme.text_secondary_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(header, area);
}

/// Renders the status bar
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller,
    state: &AppState,
    theme: &Theme,
) {
    let line = match &state.status {
        Some(msg) => {
            let style = match msg.kind {
                StatusKind::Info => theme.text_style(),
                StatusKind::Success => theme.accent_style(),
                StatusKind::Warning => theme.error_style(),
            };
            Line::from(Span::styled(msg.text.clone(), style))
        }
        None if controller.is_panel_open() => Line::from(Span::styled(
            "Tab: Next field | Enter: Save | Esc: Cancel",
            theme.text_secondary_style(),
        )),
        None => Line::from(Span::styled(
            format!(
                "n: New | Enter: Read/Unread | d: Remove | t: Theme ({}) | ?: Help | q: Quit",
                theme.theme_type.name()
            ),
            theme.text_secondary_style(),
        )),
    };

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(status, area);
}

/// Rectangle of `width` x `height` centered in `area`, clipped to fit
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(centered_rect(40, 10, area), area);
    }
}

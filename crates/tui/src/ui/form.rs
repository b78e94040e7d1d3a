// crates/tui/src/ui/form.rs
//! Add-book panel rendering

use super::centered_rect;
use crate::{
    form::{BookForm, FormField},
    theme::Theme,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 14;
const LABEL_WIDTH: u16 = 9;

/// Renders the add-book panel over whatever is behind it
pub fn render(frame: &mut Frame, area: Rect, form: &BookForm, theme: &Theme) {
    let popup = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title("New book");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
        match form.text(field) {
            Some(text) => render_text_field(frame, *row, field, text, form.focus(), theme),
            None => render_checkbox(frame, *row, form.read(), form.focus() == field, theme),
        }
    }
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    text: &str,
    focus: FormField,
    theme: &Theme,
) {
    let focused = field == focus;
    let border = if focused {
        theme.highlight_style()
    } else {
        Style::default().fg(theme.border_color())
    };

    let input = Paragraph::new(Line::from(Span::styled(text, theme.text_style()))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(field.label()),
    );
    frame.render_widget(input, area);

    if focused && area.width > 2 {
        frame.set_cursor_position((cursor_x(area, text), area.y + 1));
    }
}

/// Column just past `text` inside a bordered input, kept off the right border
fn cursor_x(area: Rect, text: &str) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    (area.x + 1).saturating_add(width).min(max_x)
}

fn render_checkbox(frame: &mut Frame, area: Rect, checked: bool, focused: bool, theme: &Theme) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        theme.highlight_style()
    } else {
        theme.text_style()
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(
            format!("{:<width$}", "Read", width = LABEL_WIDTH as usize),
            style,
        ),
        Span::styled("(Space to toggle)", theme.text_secondary_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

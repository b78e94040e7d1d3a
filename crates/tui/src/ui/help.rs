// crates/tui/src/ui/help.rs
//! Key help overlay

use super::centered_rect;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LIBRARY_KEYS: &[(&str, &str)] = &[
    ("n", "Add a book"),
    ("↑/k ↓/j", "Select a book"),
    ("Enter/Space/r", "Toggle read/unread"),
    ("d/Delete", "Remove the selected book"),
    ("t", "Cycle themes"),
    ("?", "Show this help"),
    ("q/Ctrl-C", "Quit"),
];

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab/↓", "Next field"),
    ("Shift-Tab/↑", "Previous field"),
    ("Space", "Toggle the Read box"),
    ("Enter", "Save the book"),
    ("Esc", "Cancel and clear"),
];

/// Renders the help overlay
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = (LIBRARY_KEYS.len() + FORM_KEYS.len() + 7) as u16;
    let popup = centered_rect(52, height, area);

    let mut lines = vec![Line::from(Span::styled("Library", theme.accent_style()))];
    lines.extend(key_lines(LIBRARY_KEYS, theme));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("New book panel", theme.accent_style())));
    lines.extend(key_lines(FORM_KEYS, theme));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title("Help"),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn key_lines<'a>(keys: &'a [(&'a str, &'a str)], theme: &Theme) -> Vec<Line<'a>> {
    keys.iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("  {:<16}", key), theme.highlight_style()),
                Span::styled(*what, theme.text_style()),
            ])
        })
        .collect()
}

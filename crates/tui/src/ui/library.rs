// crates/tui/src/ui/library.rs
//! Library view rendering

use crate::{
    state::AppState,
    theme::Theme,
    view::{BookCard, LibraryView, EMPTY_MESSAGE},
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Renders the card list, or the empty-state indicator
pub fn render(frame: &mut Frame, area: Rect, view: &LibraryView, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color()))
        .title("Library");

    match view {
        LibraryView::Empty => {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(EMPTY_MESSAGE, theme.text_style())),
                Line::from(Span::styled(
                    "Press n to add your first book.",
                    theme.text_secondary_style(),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

            frame.render_widget(empty, area);
        }
        LibraryView::Cards(cards) => {
            let items: Vec<ListItem> = cards.iter().map(|card| card_item(card, theme)).collect();

            let list = List::new(items)
                .block(block)
                .style(theme.text_style())
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");

            let mut list_state = ListState::default().with_selected(Some(state.selected));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn card_item<'a>(card: &'a BookCard, theme: &Theme) -> ListItem<'a> {
    ListItem::new(vec![
        Line::from(Span::styled(
            card.title.as_str(),
            theme.text_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(card.author.as_str(), theme.text_secondary_style()),
            Span::raw("  "),
            Span::styled(card.pages_label.as_str(), theme.text_secondary_style()),
        ]),
        Line::from(vec![
            Span::styled(card.status_label(), theme.status_style(card.status)),
            Span::raw("  "),
            Span::styled(
                format!("[{}] [{}]", card.toggle_caption(), card.remove_caption()),
                theme.accent_style(),
            ),
        ]),
        Line::from(""),
    ])
}

// crates/tui/src/view.rs
//! Projection of the library onto a renderable description
//!
//! [`project`] is a pure function of the current collection. It keeps no
//! memory of earlier projections, so the frontend can throw away whatever it
//! drew last time and draw the new description from scratch.

use shelfmark_core::{Book, BookId};
use shelfmark_library::Library;
use std::fmt;
use std::str::FromStr;

/// Text shown in place of the card list when the library is empty
pub const EMPTY_MESSAGE: &str = "Your library is empty.";

/// What a card action does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Toggle,
    Remove,
}

impl ActionKind {
    /// Token used when the action is handed around as text
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Toggle => "toggle",
            ActionKind::Remove => "remove",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(ActionKind::Toggle),
            "remove" => Ok(ActionKind::Remove),
            _ => Err(()),
        }
    }
}

/// An activatable control on a card, tagged with the book it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardAction {
    pub kind: ActionKind,
    pub id: BookId,
}

impl CardAction {
    pub fn toggle(id: BookId) -> Self {
        Self {
            kind: ActionKind::Toggle,
            id,
        }
    }

    pub fn remove(id: BookId) -> Self {
        Self {
            kind: ActionKind::Remove,
            id,
        }
    }
}

/// Two-state style class for the read status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Read,
    Unread,
}

impl StatusClass {
    pub fn from_read(read: bool) -> Self {
        if read {
            StatusClass::Read
        } else {
            StatusClass::Unread
        }
    }

    /// Label text for this status
    pub fn label(&self) -> &'static str {
        match self {
            StatusClass::Read => "Read",
            StatusClass::Unread => "Not read",
        }
    }

    /// Caption for the toggle control of a book in this status
    pub fn toggle_caption(&self) -> &'static str {
        match self {
            StatusClass::Read => "Mark as unread",
            StatusClass::Unread => "Mark as read",
        }
    }
}

/// Everything needed to draw one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages_label: String,
    pub status: StatusClass,
    pub toggle: CardAction,
    pub remove: CardAction,
}

impl BookCard {
    fn from_book(book: &Book) -> Self {
        let id = book.id();
        Self {
            id,
            title: book.title().to_string(),
            author: book.author().to_string(),
            pages_label: format!("{} pages", book.pages()),
            status: StatusClass::from_read(book.is_read()),
            toggle: CardAction::toggle(id),
            remove: CardAction::remove(id),
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    pub fn toggle_caption(&self) -> &'static str {
        self.status.toggle_caption()
    }

    pub fn remove_caption(&self) -> &'static str {
        "Remove"
    }

    /// Both controls, in display order
    pub fn actions(&self) -> [CardAction; 2] {
        [self.toggle, self.remove]
    }
}

/// Renderable description of the whole library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryView {
    /// The empty-state indicator; no cards
    Empty,
    /// One card per book, in library order
    Cards(Vec<BookCard>),
}

impl LibraryView {
    pub fn is_empty_state(&self) -> bool {
        matches!(self, LibraryView::Empty)
    }

    pub fn cards(&self) -> &[BookCard] {
        match self {
            LibraryView::Empty => &[],
            LibraryView::Cards(cards) => cards,
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    pub fn card(&self, index: usize) -> Option<&BookCard> {
        self.cards().get(index)
    }

    /// Position of the card for `id`, if it is shown
    pub fn position_of(&self, id: BookId) -> Option<usize> {
        self.cards().iter().position(|card| card.id == id)
    }
}

/// Builds the view for the current state of `library`
pub fn project(library: &Library) -> LibraryView {
    if library.is_empty() {
        return LibraryView::Empty;
    }

    LibraryView::Cards(library.iter().map(BookCard::from_book).collect())
}

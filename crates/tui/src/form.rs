// crates/tui/src/form.rs
//! The add-book form and its validation rules

use std::fmt;

/// Inputs on the add-book form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Pages,
    Read,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Author,
        FormField::Pages,
        FormField::Read,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Pages => "Pages",
            FormField::Read => "Read",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Pages,
            FormField::Pages => FormField::Read,
            FormField::Read => FormField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Read,
            FormField::Author => FormField::Title,
            FormField::Pages => FormField::Author,
            FormField::Read => FormField::Pages,
        }
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    MissingTitle,
    MissingAuthor,
    InvalidPages,
}

impl FormIssue {
    /// The field the issue is about
    pub fn field(&self) -> FormField {
        match self {
            FormIssue::MissingTitle => FormField::Title,
            FormIssue::MissingAuthor => FormField::Author,
            FormIssue::InvalidPages => FormField::Pages,
        }
    }
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormIssue::MissingTitle => write!(f, "Title is required"),
            FormIssue::MissingAuthor => write!(f, "Author is required"),
            FormIssue::InvalidPages => write!(f, "Pages must be a whole number above zero"),
        }
    }
}

/// Validated form contents, ready for the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub read: bool,
}

/// Raw, in-progress input of the add-book panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    title: String,
    author: String,
    pages: String,
    read: bool,
    focus: FormField,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> &str {
        &self.pages
    }

    pub fn read(&self) -> bool {
        self.read
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Raw text of a field; the read checkbox has none
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Author => Some(&self.author),
            FormField::Pages => Some(&self.pages),
            FormField::Read => None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_pages(&mut self, pages: impl Into<String>) {
        self.pages = pages.into();
    }

    pub fn set_read(&mut self, read: bool) {
        self.read = read;
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Types a character into the focused field
    ///
    /// The pages field only takes ASCII digits; the read checkbox takes none.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Author => self.author.push(c),
            FormField::Pages if c.is_ascii_digit() => self.pages.push(c),
            FormField::Pages | FormField::Read => {}
        }
    }

    /// Deletes the last character of the focused field
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Author => {
                self.author.pop();
            }
            FormField::Pages => {
                self.pages.pop();
            }
            FormField::Read => {}
        }
    }

    pub fn toggle_read_flag(&mut self) {
        self.read = !self.read;
    }

    /// Clears every input and puts focus back on the title
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks the inputs and produces a draft, or every problem found
    ///
    /// Title and author are trimmed and must be non-empty. Pages are
    /// trimmed, must parse as an integer and must be above zero.
    pub fn validate(&self) -> Result<BookDraft, Vec<FormIssue>> {
        let title = self.title.trim();
        let author = self.author.trim();
        let pages = parse_pages(&self.pages);

        let mut issues = Vec::new();
        if title.is_empty() {
            issues.push(FormIssue::MissingTitle);
        }
        if author.is_empty() {
            issues.push(FormIssue::MissingAuthor);
        }
        if pages.is_none() {
            issues.push(FormIssue::InvalidPages);
        }

        match pages {
            Some(pages) if issues.is_empty() => Ok(BookDraft {
                title: title.to_string(),
                author: author.to_string(),
                pages,
                read: self.read,
            }),
            _ => Err(issues),
        }
    }
}

fn parse_pages(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|pages| *pages > 0)
}

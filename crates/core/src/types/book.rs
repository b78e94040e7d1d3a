//! Book domain model

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a book
///
/// Opaque to callers: the only guarantees are uniqueness and stability for
/// the lifetime of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Creates a new random BookId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a BookId from its string form
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AppError::InvalidBookId {
                value: s.to_string(),
            })
    }

    /// Returns the BookId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BookId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book tracked in the personal library
///
/// Everything except `read` is fixed at creation; `read` only changes
/// through [`Book::toggle_read`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    pages: u32,
    read: bool,
}

impl Book {
    /// Creates a new book with a fresh identifier
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32, read: bool) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            pages,
            read,
        }
    }

    /// Returns the book's identifier
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the page count
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Returns true if the book has been read
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Flips the read flag and returns the new value
    pub fn toggle_read(&mut self) -> bool {
        self.read = !self.read;
        self.read
    }
}

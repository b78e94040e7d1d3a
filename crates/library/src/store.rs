// FILE: crates/library/src/store.rs

use log::debug;
use shelfmark_core::{Book, BookId};

/// In-memory, insertion-ordered collection of books
///
/// Lookups are linear scans by id. Records are only created by [`add`],
/// only changed by [`toggle_read`] and only destroyed by [`remove_by_id`].
///
/// [`add`]: Library::add
/// [`toggle_read`]: Library::toggle_read
/// [`remove_by_id`]: Library::remove_by_id
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Creates an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new book and returns its freshly generated id
    ///
    /// Inputs are taken as given; validating them is the caller's job.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        read: bool,
    ) -> BookId {
        let book = Book::new(title, author, pages, read);
        let id = book.id();
        debug!("Adding book {} ({:?})", id, book.title());
        self.books.push(book);
        id
    }

    /// Removes the book with the given id, keeping the order of the rest
    ///
    /// Returns the removed book, or `None` if no book had that id.
    pub fn remove_by_id(&mut self, id: BookId) -> Option<Book> {
        let index = self.position(id)?;
        let removed = self.books.remove(index);
        debug!("Removed book {}", id);
        Some(removed)
    }

    /// Looks up a book by id
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    /// Flips the read flag of the book with the given id
    ///
    /// Returns the new flag, or `None` if no book had that id.
    pub fn toggle_read(&mut self, id: BookId) -> Option<bool> {
        let book = self.books.iter_mut().find(|book| book.id() == id)?;
        let read = book.toggle_read();
        debug!("Book {} read = {}", id, read);
        Some(read)
    }

    /// Returns the books in display order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterates the books in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Number of books in the library
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the library holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

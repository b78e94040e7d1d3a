//! Domain types for Shelfmark

mod book;

pub use book::{Book, BookId};

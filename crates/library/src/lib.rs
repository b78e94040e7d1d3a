//! Shelfmark Library Store
//!
//! Owns the session's ordered collection of books. Every operation is total:
//! unknown identifiers are ignored rather than reported as errors, so the
//! interaction layer can dispatch any action without guarding it first.

pub mod store;

pub use store::Library;
pub use shelfmark_core::{Book, BookId};

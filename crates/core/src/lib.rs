//! Domain types shared by every Shelfmark crate.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::{Book, BookId};

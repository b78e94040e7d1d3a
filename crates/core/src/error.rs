//! Error types for Shelfmark domain code
//!
//! Library operations themselves are total: looking up, toggling or removing
//! an unknown book is a no-op, never an error. The variants here cover the
//! edges where raw outside input is turned into domain values.

use thiserror::Error;

/// Main error type for Shelfmark
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A string could not be read as a book identifier
    #[error("Invalid book id: '{value}'")]
    InvalidBookId { value: String },
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidBookId {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid book id: 'abc'");
    }
}

// crates/tui/src/error.rs
//! Error types for TUI

use thiserror::Error;

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur in the TUI
///
/// Only the terminal edge can fail; library gestures never produce errors.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error
    #[error("Terminal error: {0}")]
    Terminal(String),
}

//! Error types for the terminal front end

use thiserror::Error;

/// Result type for front-end operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur while driving the terminal
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal or event-stream I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl TuiError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

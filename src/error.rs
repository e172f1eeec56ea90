//! Error types for loading and decoding content drafts.
//!
//! The scoring engine itself is total over its input domain and never
//! returns an error; only the surrounding input layer (file/stdin reading,
//! JSON decoding) can fail.

use thiserror::Error;

/// Errors raised while reading a draft into a `SeoScoreInput`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Could not read the input source
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a valid content draft
    #[error("Invalid draft: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

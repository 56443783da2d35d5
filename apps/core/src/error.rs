use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The conversational surface (dispatcher, classifier, weekly aggregator) is
/// infallible on well-formed string input and never returns these; they exist
/// for the storage boundary and the migration utility.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents JSON encode/decode errors at the storage boundary.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Represents errors originating from a key-value store implementation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Represents data validation errors (e.g., invalid input shape).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Validation(format!("UUID error: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Validation(format!("Date parse error: {}", err))
    }
}

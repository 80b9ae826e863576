//! Error types for quizbot.

use thiserror::Error;

/// Common error type for quizbot.
#[derive(Error, Debug)]
pub enum QuizbotError {
    /// I/O error (question corpus or log file access).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Question corpus error.
    #[error("question corpus error: {0}")]
    Corpus(String),
}

/// Result type alias for quizbot operations.
pub type Result<T> = std::result::Result<T, QuizbotError>;

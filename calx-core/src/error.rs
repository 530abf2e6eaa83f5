//! Error types for the calx engine.

use thiserror::Error;

/// Errors that can occur in calx operations.
///
/// The writer's validation failures are distinct variants so callers can
/// render a field-specific message.
#[derive(Error, Debug)]
pub enum CalxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid end date '{0}'. Use YYYY-MM-DD")]
    InvalidEndDate(String),

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calx operations.
pub type CalxResult<T> = Result<T, CalxError>;

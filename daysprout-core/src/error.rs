//! Error types for the daysprout ecosystem.

use thiserror::Error;

/// Errors that can occur in daysprout operations.
#[derive(Error, Debug)]
pub enum DaySproutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("The default category cannot be deleted")]
    DefaultCategoryProtected,

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for daysprout operations.
pub type DaySproutResult<T> = Result<T, DaySproutError>;

//! Error types for the scheduler, its configuration and snapshot I/O.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced to the caller of any recall operation
#[derive(Debug, Error)]
pub enum RecallError {
    #[error("Invalid rating '{0}': expected one of poor, fair, good, great")]
    InvalidRating(String),

    #[error("Corrupted review state: {field} is {value}")]
    InvalidState { field: &'static str, value: String },

    #[error("Invalid scheduler configuration: {0}")]
    InvalidConfig(String),

    #[error("Next review date out of range: {interval_days} days after {from}")]
    DateOutOfRange {
        interval_days: u32,
        from: DateTime<Utc>,
    },

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Question {0} not found")]
    QuestionNotFound(i64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for recall operations
pub type Result<T> = std::result::Result<T, RecallError>;

//! Error types for prepmate-core.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised by the revision scheduler and planner helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("revision entry not found: {0}")]
    NotFound(String),

    #[error("invalid interval configuration: {0}")]
    InvalidIntervalConfiguration(String),

    #[error("revision entry {id} changed concurrently (expected completed = {expected})")]
    Conflict { id: String, expected: bool },

    #[error("topic already completed: {0}")]
    TopicAlreadyCompleted(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

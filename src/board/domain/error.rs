//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The rating value is outside the 1 to 5 range.
    #[error("invalid rating {0}, expected a value from 1 to 5")]
    InvalidRating(u8),

    /// The project progress value exceeds 100.
    #[error("invalid progress {0}, expected a value from 0 to 100")]
    InvalidProgress(u8),

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// A rating was entered before the task reached approval.
    #[error("task {0} is not approved yet and cannot be rated")]
    RatingBeforeApproval(TaskId),
}

/// Error returned while parsing task statuses from the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing member roles from the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

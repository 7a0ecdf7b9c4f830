//! # ForumError
//!
//! Every failure in the forum core is soft: the transition is dropped and
//! the state is left exactly as it was.

use thiserror::Error;

/// The error type returned by forum transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForumError {
    /// Required input was missing; nothing was applied
    #[error("validation skipped: {0}")]
    Validation(String),

    /// No session is active; the action waits for a login
    #[error("authentication required")]
    AuthRequired,

    /// Resource not found (e.g., Topic)
    #[error("{0} not found with ID {1}")]
    NotFound(&'static str, u64),

    /// The current role may not perform the action
    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// A specialized Result type for TimeWorld logic.
pub type Result<T> = std::result::Result<T, ForumError>;

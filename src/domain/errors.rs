// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised below the application layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or entity invariant was violated (blank username,
    /// malformed email, non-positive id).
    #[error("validation error: {0}")]
    Validation(String),
    /// A uniqueness rule was violated, e.g. a username or email that is
    /// already taken.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The backing store failed; carries the driver message.
    #[error("persistence error: {0}")]
    Persistence(String),
}

// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by category value objects and repositories.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input the category model cannot represent (nil id, NUL characters).
    #[error("invalid category data: {0}")]
    Validation(String),
    /// The store refused a write because a unique key is already taken.
    #[error("category conflict: {0}")]
    Conflict(String),
    /// The backing store failed or is unreachable.
    #[error("category storage failure: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }
}

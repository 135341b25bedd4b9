// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("precondition violated: {0}")]
    Precondition(String),
    #[error(
        "expected an instance of type '{expected}' for attribute '{attribute}', got '{actual}' instead"
    )]
    TypeMismatch {
        attribute: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl DomainError {
    #[must_use]
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }
}

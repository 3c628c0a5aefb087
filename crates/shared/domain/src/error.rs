//! Domain-level errors.
//!
//! These errors represent rejected input. They are independent of
//! infrastructure concerns (console, files).

use thiserror::Error;

/// Reasons a candidate name is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    #[error("name cannot be empty")]
    Empty,

    #[error("name too short")]
    TooShort,

    #[error("name must contain only letters, spaces, or hyphens")]
    InvalidCharacters,
}

/// Reasons an age answer is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRejection {
    #[error("age must be a number")]
    NotANumber,

    #[error("age must be positive")]
    NotPositive,

    #[error("enter a realistic age")]
    Unrealistic,
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Name failed validation
    #[error("{0}")]
    Name(#[from] NameRejection),

    /// Age failed validation
    #[error("{0}")]
    Age(#[from] AgeRejection),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

//! Unified error handling for the registration flow.
//!
//! Domain rejections are expected outcomes of a run; the remaining
//! variants are ambient failures of the console or configuration.

use std::io;

use domain::{AgeRejection, DomainError, NameRejection};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Expected outcomes
    #[error("{0}")]
    Rejected(#[from] DomainError),

    #[error("no valid age after {0} attempts")]
    AttemptsExhausted(u32),

    // Console
    #[error("input closed before registration finished")]
    InputClosed,

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    // Configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Rejected(_) => "REJECTED",
            AppError::AttemptsExhausted(_) => "ATTEMPTS_EXHAUSTED",
            AppError::InputClosed => "INPUT_CLOSED",
            AppError::Input(_) => "INPUT_ERROR",
            AppError::Output(_) => "OUTPUT_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Rejections end a run normally; everything else is a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Rejected(_) | AppError::AttemptsExhausted(_))
    }
}

impl From<NameRejection> for AppError {
    fn from(err: NameRejection) -> Self {
        AppError::Rejected(err.into())
    }
}

impl From<AgeRejection> for AppError {
    fn from(err: AgeRejection) -> Self {
        AppError::Rejected(err.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn input(err: io::Error) -> Self {
        AppError::Input(err)
    }

    pub fn output(err: io::Error) -> Self {
        AppError::Output(err)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

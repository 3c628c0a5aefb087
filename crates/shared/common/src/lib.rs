//! Common utilities shared by the registration binaries.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};

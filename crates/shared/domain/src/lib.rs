//! Domain layer - Core registration entities and rules.
//!
//! This crate contains pure domain logic with no I/O.
//! The registration service builds its flow on top of these types.

pub mod constants;
pub mod error;
pub mod events;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{AgeRejection, DomainError, DomainResult, NameRejection};
pub use events::UserCreated;
pub use user::User;
pub use validation::{is_letter, parse_age, validate_name, NameRule, StandardNameRule};

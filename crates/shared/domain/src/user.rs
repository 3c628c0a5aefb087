//! User domain entity.

use crate::constants::{ADULT_AGE, MAX_AGE, MIN_AGE};

/// A registered user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    age: u8,
}

impl User {
    /// Create a user from an already validated name and age.
    ///
    /// Callers are expected to have run the name through a
    /// [`NameRule`](crate::NameRule) and the age through
    /// [`parse_age`](crate::parse_age).
    pub fn create(name: impl Into<String>, age: u8) -> Self {
        debug_assert!((MIN_AGE..=MAX_AGE).contains(&i32::from(age)));
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    /// Check if the user is an adult
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length in characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Characters allowed in a name besides letters
pub const NAME_EXTRA_CHARS: &[char] = &[' ', '-'];

/// Smallest accepted age
pub const MIN_AGE: i32 = 1;

/// Largest accepted age
pub const MAX_AGE: i32 = 120;

// =============================================================================
// User Status
// =============================================================================

/// Age from which a user counts as an adult
pub const ADULT_AGE: u8 = 18;

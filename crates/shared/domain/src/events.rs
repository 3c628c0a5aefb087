//! Domain events.

use crate::user::User;

/// Raised once a user has been created.
///
/// Borrows the user for the duration of a synchronous dispatch and is
/// never stored.
#[derive(Debug, Clone, Copy)]
pub struct UserCreated<'a> {
    user: &'a User,
}

impl<'a> UserCreated<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }

    /// The user that was created
    pub fn user(&self) -> &'a User {
        self.user
    }
}

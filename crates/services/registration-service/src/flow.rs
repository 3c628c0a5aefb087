//! User creation flow.
//!
//! Header, name prompt, validation, age loop, then the creation event and
//! the closing line. A rejected name ends the flow before the age is asked
//! for.

use std::io::Write;
use std::num::NonZeroU32;

use common::{AppError, AppResult};
use domain::{DomainError, NameRule, User, UserCreated};

use crate::age::AgeLoop;
use crate::console::{write_line, InputSource};
use crate::notifier::CreationNotifier;
use crate::render::Renderer;

/// Runs one registration attempt.
pub struct UserCreationFlow<'a, R: NameRule> {
    rule: R,
    notifier: CreationNotifier<'a>,
    renderer: &'a dyn Renderer,
    max_age_attempts: Option<NonZeroU32>,
}

impl<'a, R: NameRule> UserCreationFlow<'a, R> {
    pub fn new(rule: R, notifier: CreationNotifier<'a>, renderer: &'a dyn Renderer) -> Self {
        Self {
            rule,
            notifier,
            renderer,
            max_age_attempts: None,
        }
    }

    /// Limit the number of age answers (None = unlimited)
    pub fn with_max_age_attempts(mut self, max_age_attempts: Option<NonZeroU32>) -> Self {
        self.max_age_attempts = max_age_attempts;
        self
    }

    /// Ask for a name and age, create the user and notify subscribers.
    ///
    /// # Errors
    /// - [`AppError::Rejected`] when the name fails validation
    /// - [`AppError::AttemptsExhausted`] when the age limit runs out
    /// - console and subscriber errors as they occur
    pub fn run(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> AppResult<User> {
        write_line(out, &self.renderer.header())?;

        tracing::debug!("Awaiting name");
        write_line(out, &self.renderer.name_prompt())?;
        let name = input.next_line()?;

        if let Err(reason) = self.rule.validate(&name) {
            tracing::info!(%reason, "Name rejected");
            write_line(out, &self.renderer.error(&reason))?;
            return Err(AppError::Rejected(DomainError::Name(reason)));
        }

        tracing::debug!("Awaiting age");
        let age = AgeLoop::new(self.renderer)
            .with_max_attempts(self.max_age_attempts)
            .acquire(input, out)?;

        let user = User::create(name, age);
        tracing::info!(age = user.age(), adult = user.is_adult(), "User created");

        self.notifier.publish(&UserCreated::new(&user))?;
        write_line(out, &self.renderer.footer())?;
        Ok(user)
    }
}

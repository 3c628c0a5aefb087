//! Age prompt loop.

use std::io::Write;
use std::num::NonZeroU32;

use common::{AppError, AppResult};
use domain::parse_age;

use crate::console::{write_line, InputSource};
use crate::render::Renderer;

/// Asks for an age until a valid one is entered.
///
/// Without a limit the loop only ends on a valid answer or closed input.
pub struct AgeLoop<'r> {
    renderer: &'r dyn Renderer,
    max_attempts: Option<NonZeroU32>,
}

impl<'r> AgeLoop<'r> {
    pub fn new(renderer: &'r dyn Renderer) -> Self {
        Self {
            renderer,
            max_attempts: None,
        }
    }

    /// Give up after `max_attempts` invalid answers
    pub fn with_max_attempts(mut self, max_attempts: Option<NonZeroU32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn acquire(&self, input: &mut impl InputSource, out: &mut impl Write) -> AppResult<u8> {
        let mut attempts: u32 = 0;
        loop {
            write_line(out, &self.renderer.age_prompt())?;
            let answer = input.next_line()?;
            attempts = attempts.saturating_add(1);

            match parse_age(&answer) {
                Ok(age) => {
                    tracing::debug!(attempts, "Age accepted");
                    return Ok(age);
                }
                Err(reason) => {
                    tracing::debug!(attempts, %reason, "Age rejected");
                    write_line(out, &self.renderer.error(&reason))?;
                }
            }

            if let Some(limit) = self.max_attempts {
                if attempts >= limit.get() {
                    tracing::info!(attempts, "Age attempts exhausted");
                    write_line(out, &self.renderer.attempts_exhausted(attempts))?;
                    return Err(AppError::AttemptsExhausted(attempts));
                }
            }
        }
    }
}

//! Registration service - interactive user registration.
//!
//! Reads a name and an age from the console, validates both, and
//! announces the created user to its subscribers.
//!
//! # Modules
//!
//! - **age**: age prompt loop
//! - **cli**: command-line interface
//! - **console**: line input and key press helpers
//! - **flow**: the registration flow itself
//! - **notifier**: synchronous publish/subscribe
//! - **render**: decorated and plain output
//! - **sinks**: presentation and persistence subscribers

pub mod age;
pub mod cli;
pub mod console;
pub mod flow;
pub mod notifier;
pub mod render;
pub mod sinks;

use std::io;

use common::{AppResult, RegistrationConfig};
use domain::{StandardNameRule, User};

pub use flow::UserCreationFlow;
pub use notifier::{CreationNotifier, CreationSubscriber};
pub use render::{renderer_for, Renderer};

/// Run one registration on stdin/stdout with the standard sinks.
///
/// Subscribers are registered presentation first, then persistence.
pub fn run_interactive(config: &RegistrationConfig, renderer: &dyn Renderer) -> AppResult<User> {
    tracing::debug!(?config, "Starting registration");

    let notifier = CreationNotifier::new()
        .with(sinks::PresentationSink::new(io::stdout(), renderer))
        .with(sinks::PersistenceSink::new(
            sinks::FileUserLog::new(&config.log_file),
            io::stdout(),
            renderer,
        ));

    let mut flow = UserCreationFlow::new(StandardNameRule, notifier, renderer)
        .with_max_age_attempts(config.max_age_attempts);

    flow.run(&mut io::stdin().lock(), &mut io::stdout())
}

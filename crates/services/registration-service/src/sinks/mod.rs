//! Subscribers reacting to user creation.

pub mod persistence;
pub mod presentation;

pub use persistence::{format_record, FileUserLog, PersistenceSink, UserLog};
pub use presentation::PresentationSink;

#[cfg(any(test, feature = "test-utils"))]
pub use persistence::MockUserLog;

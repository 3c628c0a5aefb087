//! Append-only log of adult users.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local};
use common::AppResult;
use domain::{User, UserCreated};

use crate::console::write_line;
use crate::notifier::CreationSubscriber;
use crate::render::Renderer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Timestamp layout of a log record
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for log records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserLog {
    /// Append one complete record
    fn append(&self, record: &str) -> io::Result<()>;

    /// Where records end up, for messages
    fn location(&self) -> PathBuf;
}

/// [`UserLog`] backed by a text file, opened in append mode per write.
#[derive(Debug, Clone)]
pub struct FileUserLog {
    path: PathBuf,
}

impl FileUserLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserLog for FileUserLog {
    fn append(&self, record: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Format one log line: `<timestamp>: <name>, <age> years\n`.
pub fn format_record(user: &User, at: DateTime<Local>) -> String {
    format!(
        "{}: {}, {} years\n",
        at.format(RECORD_TIMESTAMP_FORMAT),
        user.name(),
        user.age()
    )
}

/// Writes adult users to a [`UserLog`].
///
/// Write failures are reported on the console and swallowed so they never
/// interrupt the notification.
pub struct PersistenceSink<'r, L: UserLog, W: Write> {
    log: L,
    out: W,
    renderer: &'r dyn Renderer,
}

impl<'r, L: UserLog, W: Write> PersistenceSink<'r, L, W> {
    pub fn new(log: L, out: W, renderer: &'r dyn Renderer) -> Self {
        Self { log, out, renderer }
    }
}

impl<L: UserLog, W: Write> CreationSubscriber for PersistenceSink<'_, L, W> {
    fn on_user_created(&mut self, event: &UserCreated<'_>) -> AppResult<()> {
        let user = event.user();
        if !user.is_adult() {
            tracing::debug!("User is a minor, nothing to persist");
            return Ok(());
        }

        let record = format_record(user, Local::now());
        let location = self.log.location();
        let message = match self.log.append(&record) {
            Ok(()) => {
                tracing::info!("Persisted user to {}", location.display());
                self.renderer.saved(&location)
            }
            Err(e) => {
                tracing::warn!("Failed to persist user to {}: {}", location.display(), e);
                self.renderer.save_failed(&location, &e)
            }
        };

        write_line(&mut self.out, &message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainRenderer;
    use chrono::TimeZone;

    fn notify(sink: &mut impl CreationSubscriber, user: &User) -> AppResult<()> {
        sink.on_user_created(&UserCreated::new(user))
    }

    #[test]
    fn test_format_record() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let record = format_record(&User::create("Anna", 25), at);
        assert_eq!(record, "2024-03-09 14:05:00: Anna, 25 years\n");
    }

    #[test]
    fn test_adult_is_appended_once() {
        let mut log = MockUserLog::new();
        log.expect_append()
            .withf(|record: &str| record.ends_with(": Anna, 25 years\n"))
            .times(1)
            .returning(|_| Ok(()));
        log.expect_location().return_const(PathBuf::from("users.txt"));

        let mut out = Vec::new();
        let mut sink = PersistenceSink::new(log, &mut out, &PlainRenderer);
        notify(&mut sink, &User::create("Anna", 25)).unwrap();
        drop(sink);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Saved to users.txt"));
    }

    #[test]
    fn test_minor_is_not_appended() {
        let mut log = MockUserLog::new();
        log.expect_append().times(0);
        log.expect_location().times(0);

        let mut out = Vec::new();
        let mut sink = PersistenceSink::new(log, &mut out, &PlainRenderer);
        notify(&mut sink, &User::create("Bo", 17)).unwrap();
        drop(sink);

        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_is_reported_not_raised() {
        let mut log = MockUserLog::new();
        log.expect_append()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")));
        log.expect_location().return_const(PathBuf::from("users.txt"));

        let mut out = Vec::new();
        let mut sink = PersistenceSink::new(log, &mut out, &PlainRenderer);
        assert!(notify(&mut sink, &User::create("Anna", 30)).is_ok());
        drop(sink);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Failed to save to users.txt: read-only"));
    }

    #[test]
    fn test_file_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(&path, "existing\n").unwrap();

        let log = FileUserLog::new(&path);
        log.append("one\n").unwrap();
        log.append("two\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\none\ntwo\n");
        assert_eq!(log.location(), path);
    }

    #[test]
    fn test_file_log_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let log = FileUserLog::new(dir.path());
        assert!(log.append("record\n").is_err());
    }
}

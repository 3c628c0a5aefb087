//! Console input and output helpers.
//!
//! The flow reads through [`InputSource`] so tests can feed lines from
//! memory instead of a terminal.

use std::io::{self, BufRead, Write};

use common::{AppError, AppResult};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

/// A source of answer lines.
pub trait InputSource {
    /// Read the next line without its line terminator.
    ///
    /// Returns [`AppError::InputClosed`] at end of input.
    fn next_line(&mut self) -> AppResult<String>;
}

impl<R: BufRead> InputSource for R {
    fn next_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let read = BufRead::read_line(self, &mut line).map_err(AppError::input)?;
        if read == 0 {
            return Err(AppError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Write a block of text followed by a newline and flush it.
pub fn write_line(out: &mut impl Write, text: &str) -> AppResult<()> {
    writeln!(out, "{}", text)
        .and_then(|_| out.flush())
        .map_err(AppError::output)
}

/// Block until a key is pressed.
///
/// Switches the terminal to raw mode for the duration of the wait.
pub fn wait_for_key_press() -> io::Result<()> {
    let _guard = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

//! Registration configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

// =============================================================================
// Defaults
// =============================================================================

/// Default append-only log of adult users
pub const DEFAULT_LOG_FILE: &str = "users.txt";

/// Environment variable for the log file path
pub const ENV_LOG_FILE: &str = "REGISTRATION_LOG_FILE";

/// Environment variable for the output style
pub const ENV_STYLE: &str = "REGISTRATION_STYLE";

/// Environment variable for the age attempt limit
pub const ENV_MAX_AGE_ATTEMPTS: &str = "REGISTRATION_MAX_AGE_ATTEMPTS";

/// Environment variable controlling the final key press wait
pub const ENV_WAIT_FOR_KEY: &str = "REGISTRATION_WAIT_FOR_KEY";

/// How console output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Colors, box borders and emoji
    #[default]
    Decorated,
    /// Plain text only
    Plain,
}

impl FromStr for RenderStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decorated" | "color" => Ok(RenderStyle::Decorated),
            "plain" => Ok(RenderStyle::Plain),
            other => Err(AppError::config(format!("unknown style '{}'", other))),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Decorated => write!(f, "decorated"),
            RenderStyle::Plain => write!(f, "plain"),
        }
    }
}

/// Registration configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Append-only log of adult users
    pub log_file: PathBuf,
    /// Console rendering style
    pub style: RenderStyle,
    /// Age prompt limit (None = ask until a valid age is given)
    pub max_age_attempts: Option<NonZeroU32>,
    /// Wait for a key press before exiting
    pub wait_for_key: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            style: RenderStyle::default(),
            max_age_attempts: None,
            wait_for_key: true,
        }
    }
}

impl RegistrationConfig {
    /// Load configuration from environment variables (and `.env`).
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let style = match lookup(ENV_STYLE) {
            Some(raw) => raw.parse::<RenderStyle>().unwrap_or_else(|e| {
                tracing::warn!("{}: {}, using {}", ENV_STYLE, e, defaults.style);
                defaults.style
            }),
            None => defaults.style,
        };

        let max_age_attempts = lookup(ENV_MAX_AGE_ATTEMPTS).and_then(|raw| {
            let parsed = raw.trim().parse::<NonZeroU32>().ok();
            if parsed.is_none() {
                tracing::warn!(
                    "{} must be a positive integer, got '{}'; retrying without limit",
                    ENV_MAX_AGE_ATTEMPTS,
                    raw
                );
            }
            parsed
        });

        let wait_for_key = match lookup(ENV_WAIT_FOR_KEY) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!("{} must be true or false, got '{}'", ENV_WAIT_FOR_KEY, raw);
                defaults.wait_for_key
            }),
            None => defaults.wait_for_key,
        };

        Self {
            log_file: lookup(ENV_LOG_FILE)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            style,
            max_age_attempts,
            wait_for_key,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Every flag is
//! optional and overrides the environment configuration.

use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::{RegistrationConfig, RenderStyle};

/// Interactive user registration
#[derive(Parser, Debug)]
#[command(name = "user-registration")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// File that adult users are appended to
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Output style
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Stop asking for an age after this many invalid answers
    #[arg(long)]
    pub max_age_attempts: Option<NonZeroU32>,

    /// Exit without waiting for a key press
    #[arg(long)]
    pub no_wait: bool,
}

/// Output styles accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    /// Colors, borders and emoji
    Decorated,
    /// Plain text
    Plain,
}

impl From<StyleArg> for RenderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Decorated => RenderStyle::Decorated,
            StyleArg::Plain => RenderStyle::Plain,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: RegistrationConfig) -> RegistrationConfig {
        if let Some(path) = &self.log_file {
            config.log_file = path.clone();
        }
        if let Some(style) = self.style {
            config.style = style.into();
        }
        if self.max_age_attempts.is_some() {
            config.max_age_attempts = self.max_age_attempts;
        }
        if self.no_wait {
            config.wait_for_key = false;
        }
        config
    }
}

//! Console rendering strategies.
//!
//! Every piece of text the program shows goes through a [`Renderer`], so the
//! decorated and plain variants share one registration flow.

use std::fmt::Display;
use std::io;
use std::path::Path;

use common::RenderStyle;
use crossterm::style::Stylize;
use domain::User;

const HEADER_TITLE: &str = "USER REGISTRATION";
const CREATED_TITLE: &str = "USER CREATED SUCCESSFULLY";

/// Formats console text.
pub trait Renderer {
    /// Banner shown before the first prompt
    fn header(&self) -> String;

    fn name_prompt(&self) -> String;

    fn age_prompt(&self) -> String;

    /// A rejection or failure message
    fn error(&self, reason: &dyn Display) -> String;

    /// Notice that the age loop gave up
    fn attempts_exhausted(&self, attempts: u32) -> String;

    /// Summary of a freshly created user
    fn summary(&self, user: &User) -> String;

    /// Confirmation that the user was written to the log
    fn saved(&self, path: &Path) -> String;

    /// Notice that writing the log failed
    fn save_failed(&self, path: &Path, err: &io::Error) -> String;

    /// Closing line printed once every subscriber has run
    fn footer(&self) -> String;

    fn exit_prompt(&self) -> String;
}

/// Pick the renderer for a configured style.
pub fn renderer_for(style: RenderStyle) -> Box<dyn Renderer> {
    match style {
        RenderStyle::Decorated => Box::new(DecoratedRenderer),
        RenderStyle::Plain => Box::new(PlainRenderer),
    }
}

fn status_label(user: &User) -> &'static str {
    if user.is_adult() {
        "Adult"
    } else {
        "Minor"
    }
}

/// Colored output with box borders and emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratedRenderer;

impl DecoratedRenderer {
    const RULE: &'static str = "====================================";
    const DOUBLE_RULE: &'static str = "════════════════════════════════════";
}

impl Renderer for DecoratedRenderer {
    fn header(&self) -> String {
        format!(
            "{}\n{}\n{}",
            Self::RULE.dark_cyan(),
            format!(" {}", HEADER_TITLE).dark_cyan(),
            Self::RULE.dark_cyan()
        )
    }

    fn name_prompt(&self) -> String {
        "Enter your name:".cyan().to_string()
    }

    fn age_prompt(&self) -> String {
        "Enter your age:".cyan().to_string()
    }

    fn error(&self, reason: &dyn Display) -> String {
        format!("Error: {}!", reason).red().to_string()
    }

    fn attempts_exhausted(&self, attempts: u32) -> String {
        format!("⛔ No valid age after {} attempts, registration cancelled", attempts)
            .red()
            .to_string()
    }

    fn summary(&self, user: &User) -> String {
        [
            String::new(),
            Self::DOUBLE_RULE.green().to_string(),
            format!("   {}", CREATED_TITLE).green().to_string(),
            Self::DOUBLE_RULE.green().to_string(),
            format!("👋 Welcome, {}!", user.name()).yellow().to_string(),
            format!("🔞 Age: {} years", user.age()).cyan().to_string(),
            format!("📌 Status: {}", status_label(user)).cyan().to_string(),
        ]
        .join("\n")
    }

    fn saved(&self, path: &Path) -> String {
        format!("💾 Your data has been saved to {}", path.display())
            .magenta()
            .to_string()
    }

    fn save_failed(&self, path: &Path, err: &io::Error) -> String {
        format!("❌ Failed to save to {}: {}", path.display(), err)
            .red()
            .to_string()
    }

    fn footer(&self) -> String {
        format!("{}\n", Self::DOUBLE_RULE.green())
    }

    fn exit_prompt(&self) -> String {
        "\nPress any key to exit...".dark_yellow().to_string()
    }
}

/// Plain text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn header(&self) -> String {
        format!("== {} ==", HEADER_TITLE)
    }

    fn name_prompt(&self) -> String {
        "Enter your name:".to_string()
    }

    fn age_prompt(&self) -> String {
        "Enter your age:".to_string()
    }

    fn error(&self, reason: &dyn Display) -> String {
        format!("Error: {}", reason)
    }

    fn attempts_exhausted(&self, attempts: u32) -> String {
        format!("No valid age after {} attempts, registration cancelled", attempts)
    }

    fn summary(&self, user: &User) -> String {
        format!(
            "\n{}\nName: {}\nAge: {} years\nStatus: {}",
            CREATED_TITLE,
            user.name(),
            user.age(),
            status_label(user)
        )
    }

    fn saved(&self, path: &Path) -> String {
        format!("Saved to {}", path.display())
    }

    fn save_failed(&self, path: &Path, err: &io::Error) -> String {
        format!("Failed to save to {}: {}", path.display(), err)
    }

    fn footer(&self) -> String {
        String::new()
    }

    fn exit_prompt(&self) -> String {
        "\nPress any key to exit...".to_string()
    }
}

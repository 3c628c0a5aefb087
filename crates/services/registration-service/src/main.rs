//! User registration - Application entry point

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::RegistrationConfig;
use registration_lib::{cli::Cli, console, renderer_for, run_interactive};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = cli.apply(RegistrationConfig::from_env());
    tracing::debug!("Configuration loaded");

    let renderer = renderer_for(config.style);
    let status = match run_interactive(&config, renderer.as_ref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_rejection() => {
            tracing::info!("Registration ended without a user: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code(), "Registration failed: {}", e);
            ExitCode::FAILURE
        }
    };

    if config.wait_for_key && io::stdin().is_terminal() {
        if let Err(e) = console::write_line(&mut io::stdout(), &renderer.exit_prompt()) {
            tracing::warn!("{}", e);
        } else if let Err(e) = console::wait_for_key_press() {
            tracing::warn!("Failed to wait for a key press: {}", e);
        }
    }

    status
}

/// Initialize tracing subscriber, logging to stderr
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

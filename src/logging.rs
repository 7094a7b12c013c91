//! Logging setup
//!
//! Diagnostics go to stderr so they never mix with the word lists printed on
//! stdout. The terminal UI owns the screen, so it logs to a sink instead.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Discard,
}

/// Map `-v` repetitions to a default filter directive
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the verbosity-derived level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8, target: LogTarget) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!(verbosity, ?target, "logging initialized");
    Ok(())
}

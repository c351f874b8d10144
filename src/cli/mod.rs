//! CLI interface for soundex
//!
//! Provides single-name encoding, pairwise comparison and character lookup.

pub mod args;
pub mod commands;

use tracing_subscriber::EnvFilter;

pub use args::{Cli, Commands};

/// Environment variable holding the log filter for the binary.
pub const LOG_ENV: &str = "SOUNDEX_LOG";

/// Install a stderr `fmt` subscriber filtered by [`LOG_ENV`] (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

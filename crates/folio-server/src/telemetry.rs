//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (usually the
/// `[logging] filter` config value) applies. Records emitted through the
/// `log` facade by the library crates are forwarded as well. Output goes
/// to stderr so command output on stdout stays clean.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::Logging(format!("invalid filter '{default_filter}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

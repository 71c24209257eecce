//! Tracing setup for the helper binaries.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is left for results so JSON output stays machine-readable.
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))
}

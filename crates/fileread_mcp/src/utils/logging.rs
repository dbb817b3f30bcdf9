use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{FileReadError, FileReadResult};

/// Initialize logging based on environment configuration
///
/// Logging is enabled only when `RUST_LOG` is set and always writes to
/// stderr: stdout carries the MCP stdio transport and must stay clean.
pub fn init_logging() -> FileReadResult<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| FileReadError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

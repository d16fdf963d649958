//! Logging initialisation via tracing-subscriber.
//!
//! Logs go to a file only: the TUI owns the terminal, and writing to stderr
//! would corrupt the alternate screen. With no `--log-file` nothing is
//! installed and tracing macros are no-ops.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::ZapioError;

/// Install the global subscriber appending to `log_file`, filtered by
/// `RUST_LOG` (default `info`). No-op when `log_file` is `None`.
pub fn init(log_file: Option<&Path>) -> Result<(), ZapioError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ZapioError::Logger(format!("failed to open log file '{}': {e}", path.display()))
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| ZapioError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

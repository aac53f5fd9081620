//! Logging setup.
//!
//! File-only tracing: the TUI owns the terminal while the alternate screen
//! is active, so nothing may write to stdout/stderr. Logs go to a daily
//! rolling file under ${MXLOGIN_HOME}/logs via a non-blocking writer.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes file logging and returns the writer guard.
///
/// The caller must hold the guard for the lifetime of the process; dropping
/// it flushes and stops the background writer. Filtering follows the
/// `MXLOGIN_LOG` env var (`tracing_subscriber::EnvFilter` syntax), defaulting
/// to `info`.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "mxlogin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("MXLOGIN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

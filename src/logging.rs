//! Log sink setup and the shared error-logging helper.
//!
//! The sink is a single append-only file opened once at startup. Writes go
//! through `tracing-appender`'s non-blocking worker, which serializes
//! concurrent appends from all request tasks; the returned guard must stay
//! alive for the lifetime of the process so buffered entries are flushed.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Opens the log file and installs the global tracing subscriber.
///
/// Must run before any component that logs is constructed. Returns an error
/// if the log file cannot be opened; the caller treats that as fatal.
pub fn init(config: &Config) -> io::Result<WorkerGuard> {
    if let Some(dir) = Path::new(&config.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&config.log_file)?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
    }

    Ok(guard)
}

/// Logs a rejected request at error level.
///
/// Single choke point for the handlers, so every 400 response leaves an
/// entry with the originating function, the underlying error, and (via the
/// request span) the request id.
pub fn log_error(function: &str, err: &dyn Display, msg: &str) {
    tracing::error!(function, error = %err, "{msg}");
}

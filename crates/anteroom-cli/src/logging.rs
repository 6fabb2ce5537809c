//! File logging for the TUI.
//!
//! The login screen owns the terminal, so logs go to a file under
//! `${ANTEROOM_HOME}/logs/` instead of stderr. `ANTEROOM_LOG` controls
//! the filter (defaults to `info`).

use std::fs::OpenOptions;

use anteroom_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging. Returns the flush guard, which must stay
/// alive for the duration of the process. Logging failures are warnings,
/// never fatal.
pub fn init() -> Option<WorkerGuard> {
    let log_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: could not create log directory {}: {e}", log_dir.display());
        return None;
    }

    let log_path = log_dir.join("anteroom.log");
    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {e}", log_path.display());
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    let filter = EnvFilter::try_from_env("ANTEROOM_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Some(guard),
        Err(_) => None, // Already initialized
    }
}

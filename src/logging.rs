//! Logging setup
//!
//! The TUI owns the terminal, so log output goes to a daily rolling file in
//! `<base>/logs/`. `JOBDESK_LOG` overrides the configured filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{JobdeskPaths, Settings};
use crate::error::{JobdeskError, JobdeskResult};

/// Install the global subscriber. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init(paths: &JobdeskPaths, settings: &Settings) -> JobdeskResult<WorkerGuard> {
    paths.ensure_directories()?;

    let appender = tracing_appender::rolling::daily(paths.log_dir(), "jobdesk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("JOBDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| JobdeskError::Config(format!("Failed to initialise logging: {}", e)))?;

    Ok(guard)
}

//! File logging
//!
//! The TUI owns the terminal, so logs go to a daily rolling file under the
//! user data directory (~/.local/share/dramalines/logs on Linux). When that
//! directory cannot be created the program runs without a log.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter
pub const LOG_ENV: &str = "DRAMALINES_LOG";

/// Filter used when neither the environment nor the config sets one
pub const DEFAULT_FILTER: &str = "dramalines=info";

/// Directory log files are written to
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("dramalines").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("dramalines").join("logs"))
}

/// Pick the filter directive: environment, then config, then default
fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .ok()
        .or_else(|| configured.and_then(|f| EnvFilter::try_new(f).ok()))
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Daily rolling `dramalines.<date>.log` appender in `dir`
fn appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("dramalines")
        .filename_suffix("log")
        .build(dir)
}

/// Install the global subscriber writing under the default log directory.
///
/// Keep the returned guard alive for the lifetime of the program, dropping it
/// flushes buffered lines. `None` means logging is off.
pub fn init(configured: Option<&str>) -> Option<WorkerGuard> {
    init_in(&log_dir(), configured)
}

/// Install the global subscriber writing under `dir`
pub fn init_in(dir: &Path, configured: Option<&str>) -> Option<WorkerGuard> {
    let file_appender = appender(dir).ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter(configured))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Some(guard)
}

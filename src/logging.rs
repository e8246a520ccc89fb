use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a directory for daily log files.
pub const LOG_DIR_ENV: &str = "MACOS_ICONS_LOG_DIR";

/// Guard of the file writer, kept here so exit paths outside `main` can flush it.
static FILE_LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Keep the file writer's guard alive until [`flush_file_logs`] is called.
pub fn hold_file_log_guard(guard: WorkerGuard) {
    if let Ok(mut slot) = FILE_LOG_GUARD.lock() {
        *slot = Some(guard);
    }
}

/// Flush buffered file logs by dropping the held guard.
///
/// Must run before `std::process::exit`, which skips destructors.
pub fn flush_file_logs() {
    let guard = match FILE_LOG_GUARD.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    drop(guard);
}

/// Build the level filter: `RUST_LOG` if set, otherwise `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Setup console logging on stderr.
///
/// Diagnostics stay on stderr so the progress lines on stdout read cleanly.
/// Only warnings and errors are shown unless `RUST_LOG` says otherwise.
pub fn setup_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter("warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize logging")
}

/// Setup console logging plus a daily rotating log file.
///
/// # Arguments
/// * `log_dir` - Directory for log files, created if missing
/// * `log_prefix` - Prefix for log files (e.g., "macos-icons")
///
/// # Returns
/// A guard that must be held for the duration of the program to keep logging active
pub fn setup_logging_with_file(
    log_dir: &Utf8Path,
    log_prefix: &str,
) -> Result<WorkerGuard> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }

    let file_appender = rolling::daily(log_dir, log_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter("debug"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter("warn"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::info!("Logging initialized: dir={}, prefix={}", log_dir, log_prefix);

    Ok(guard)
}

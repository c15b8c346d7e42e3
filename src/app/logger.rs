use crate::app::error::Result;
use eyre::WrapErr;
use std::path::{Path, PathBuf};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_DIR_ENV_VAR: &str = "HISTORY_WINDOW_LOG_DIR";

/// Route tracing output to a daily log file; the terminal belongs to the UI. Keep the
/// returned guard alive until exit so buffered lines are flushed.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = log_directory();

    #[cfg(debug_assertions)]
    {
        init_debug_tracing(&log_dir).wrap_err("Failed to initialize logging")
    }
    #[cfg(not(debug_assertions))]
    {
        init_release_tracing(&log_dir).wrap_err("Failed to initialize logging")
    }
}

pub fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV_VAR) {
        PathBuf::from(dir)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".history-window").join("logs")
    } else {
        std::env::temp_dir().join("history-window")
    }
}

#[cfg(debug_assertions)]
fn init_debug_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = rolling::daily(log_dir, "history-window-debug.log");
    let (non_blocking_log_file, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_log_file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("history_window=debug")),
        );

    tracing_subscriber::registry().with(file_layer).try_init()?;

    tracing::info!("Debug tracing initialized, logging to: {}", log_dir.display());
    Ok(guard)
}

#[cfg(not(debug_assertions))]
fn init_release_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = rolling::daily(log_dir, "history-window.log");
    let (non_blocking_log_file, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_log_file)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("history_window=info")),
        );

    tracing_subscriber::registry().with(file_layer).try_init()?;

    tracing::info!("Release tracing initialized, logging to: {}", log_dir.display());
    Ok(guard)
}

use std::path::PathBuf;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::{console_filter, init_basic_console_logging};

/// Keeps the non-blocking file writers alive; dropping it flushes them.
#[derive(Debug, Default)]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Whether file logging is enabled at runtime (`OBSERVABILITY_ENABLED`, default `true`).
pub fn is_observability_enabled() -> bool {
    std::env::var("OBSERVABILITY_ENABLED")
        .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
        .unwrap_or(true)
}

fn log_dir() -> PathBuf {
    std::env::var("CAMPUSBOARD_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("storage/logs"))
}

/// Install the global subscriber: console plus rolling error and JSON files.
///
/// Falls back to console-only logging when observability is disabled or the
/// log directory cannot be created.
pub fn init_tracing() -> LogGuards {
    if !is_observability_enabled() {
        init_basic_console_logging();
        return LogGuards::default();
    }

    let log_dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        init_basic_console_logging();
        warn!(error = %e, dir = %log_dir.display(), "Failed to create logs directory, console logging only");
        return LogGuards::default();
    }

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter());

    // File layer for errors
    let (error_writer, error_guard) = tracing_appender::non_blocking(RollingFileAppender::new(
        Rotation::DAILY,
        &log_dir,
        "campusboard.log",
    ));

    let file_layer = fmt::layer()
        .with_writer(error_writer)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // JSON file layer for structured logs
    let (json_writer, json_guard) = tracing_appender::non_blocking(RollingFileAppender::new(
        Rotation::DAILY,
        &log_dir,
        "campusboard.json",
    ));

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_writer)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init();

    LogGuards {
        _guards: vec![error_guard, json_guard],
    }
}

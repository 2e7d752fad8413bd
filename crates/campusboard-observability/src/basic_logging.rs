use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the console filter shared by every logging setup.
///
/// `RUST_LOG` wins when set; otherwise Campusboard crates log at `LOG_LEVEL`
/// (default `info`) and HTTP/Redis internals only at `warn`.
pub(crate) fn console_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "campusboard={},reqwest=warn,hyper=warn,redis=warn",
            log_level
        ))
    })
}

/// Initialize console-only logging.
///
/// Used when file logging is compiled out or disabled at runtime. Events go
/// to stderr so they never interleave with command output on stdout.
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter());

    // A subscriber may already be installed (tests, embedding applications).
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

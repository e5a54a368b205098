//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by `RUST_LOG`, falling back to `config.trace_level`
///    (default `"info"`)
/// 2. Formats events as plain text lines
/// 3. Writes them to `config.trace_file` through a rotating [`FileWriter`],
///    or to stderr when no file is configured
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Silently gives up if that directory cannot be created (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use bookmark_store::observability::init_tracing;
/// use bookmark_store::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if let Some(trace_file) = &config.trace_file {
        if let Some(parent) = trace_file.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let writer = Arc::new(FileWriter::new(trace_file.clone()));
        registry
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(trace_file = ?config.trace_file, "tracing initialized");
    }
}

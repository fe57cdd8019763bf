//! Logging Infrastructure
//!
//! Structured logging setup for both console and file output.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the global tracing subscriber from config
///
/// `LOG_LEVEL` drives the env-filter directive; when `LOG_DIR` points at
/// an existing directory, logs additionally roll daily into a file.
pub fn init_logger(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "ecommerce-orders");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}

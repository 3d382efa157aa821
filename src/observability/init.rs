//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "horarios-admin.log";

/// Filter directive: `RUST_LOG`, else the configured level, else `info`.
#[must_use]
pub fn filter_directive(config: &Config) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global subscriber writing to the rotating log file.
///
/// Logging is optional: if the data directory cannot be created, the filter
/// is invalid or a subscriber is already set, this returns silently.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(filter) = EnvFilter::try_new(filter_directive(config)) else {
        return;
    };

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

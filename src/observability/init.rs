//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name used when no log file is configured.
const DEFAULT_LOG_FILE: &str = "unit-converter.log";

/// Resolves the log file path from configuration.
///
/// `Config.log_file` is tilde-expanded; otherwise the file lives in the data
/// directory.
#[must_use]
pub fn log_file_path(config: &Config) -> PathBuf {
    config.log_file.as_deref().map_or_else(
        || paths::data_dir().join(DEFAULT_LOG_FILE),
        |file| PathBuf::from(paths::expand_tilde(file)),
    )
}

/// Installs the global tracing subscriber.
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently skips setup if the directory cannot be created
/// - Idempotent: only the first successful call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_file = log_file_path(config);
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = fmt::layer()
        .with_writer(FileWriter::new(log_file))
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_log_file_is_used_verbatim() {
        let config = Config {
            log_file: Some("/var/tmp/conv.log".to_string()),
            ..Config::default()
        };
        assert_eq!(log_file_path(&config), PathBuf::from("/var/tmp/conv.log"));
    }

    #[test]
    fn default_log_file_lives_in_data_dir() {
        let path = log_file_path(&Config::default());
        assert!(path.ends_with("unit-converter/unit-converter.log"));
    }
}

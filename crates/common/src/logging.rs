//! Logging and tracing initialization.
//!
//! Console output goes to stdout. When `LoggingConfig.file` is set, events
//! are appended to that file instead, with ANSI styling disabled so the
//! file stays grep-friendly.

use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (writer, ansi) = match log_file_writer(config) {
        Some(writer) => (writer, false),
        None => (BoxMakeWriter::new(std::io::stdout), true),
    };

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Append-mode writer for the configured log file, if any.
///
/// An unopenable file falls back to console output rather than silently
/// dropping events.
fn log_file_writer(config: &LoggingConfig) -> Option<BoxMakeWriter> {
    let path = config.file.as_ref()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(BoxMakeWriter::new(Arc::new(file))),
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_configured_means_no_file_writer() {
        let config = LoggingConfig::default();
        assert!(config.file.is_none());
        assert!(log_file_writer(&config).is_none());
    }

    #[test]
    fn test_configured_log_file_receives_events() {
        let dir = std::env::temp_dir().join(format!("stresscam-logging-{}", std::process::id()));
        let path = dir.join("logs").join("stresscam.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            json: false,
            file: Some(path.clone()),
        };

        init_logging(&config);
        tracing::info!("file sink smoke line");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("file sink smoke line"));
        std::fs::remove_dir_all(&dir).ok();
    }
}

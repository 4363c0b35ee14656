use crate::domain::Severity;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to create log file '{path}': {source}")]
    CreateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to install the global logger: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            // tracing has no Critical level; fold it into ERROR
            Severity::Critical | Severity::Error => tracing::Level::ERROR,
            Severity::Warning => tracing::Level::WARN,
            Severity::Info => tracing::Level::INFO,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Trace => tracing::Level::TRACE,
        }
    }
}

/// Truncates (or creates) the log file for this run.
pub fn create_log_file(path: &Path) -> Result<File, LoggingError> {
    File::create(path).map_err(|source| LoggingError::CreateFile {
        path: path.display().to_string(),
        source,
    })
}

/// Builds the dual-sink subscriber: a colorized console layer on standard
/// error and an uncolored layer on the given file, both gated by one level
/// filter derived from the severity threshold.
pub fn build_subscriber(severity: Severity, log_file: File) -> impl Subscriber + Send + Sync {
    let timer = ChronoLocal::new("[%H:%M:%S %z]".to_owned());

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(severity.into()))
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_timer(timer)
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
}

/// Creates the log file and installs the global subscriber.
pub fn setup_logging(severity: Severity, log_file: &Path) -> Result<(), LoggingError> {
    let file = create_log_file(log_file)?;
    tracing::subscriber::set_global_default(build_subscriber(severity, file))?;
    Ok(())
}

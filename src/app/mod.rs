pub mod config;
pub mod logging;

pub use config::{Config, ConfigError};
pub use logging::{LoggingError, build_subscriber, create_log_file, setup_logging};

use crate::domain::Severity;
use std::io::Write;
use std::process;
use tracing::info;

pub struct App {
    config: Config,
    severity: Severity,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, Box<dyn std::error::Error + Send + Sync>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args_and_env(args)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Resolve eagerly; invalid input aborts startup before any sink
        // exists.
        let severity = config.severity()?;
        Ok(Self { config, severity })
    }

    pub fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        greet(std::io::stdout(), &self.config.name)?;

        setup_logging(self.severity, &self.config.log_file)?;
        info!("Log something");

        Ok(())
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }
}

/// Writes the greeting with no trailing newline and flushes immediately.
fn greet<W: Write>(mut out: W, name: &str) -> std::io::Result<()> {
    write!(out, "Hello {name}")?;
    out.flush()
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Main entry point for the application
pub fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match App::from_args(std::env::args()) {
        Ok(app) => {
            if let Err(e) = app.run() {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }

    Ok(())
}

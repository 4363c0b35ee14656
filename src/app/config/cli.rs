use super::ConfigError;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Your name
    #[arg(short, long, env = "GREET_NAME", default_value = "World")]
    pub name: String,

    /// Set log message level. Set to 0 - 5 or one of `Trace`, `Debug`,
    /// `Info`, `Warning`, `Error` or `Critical`. Ex: "-v Debug".
    /// Default: `Info`
    #[arg(short, long, env = "GREET_VERBOSITY", allow_negative_numbers = true)]
    pub verbosity: Vec<String>,

    /// Log file path (truncated at startup)
    #[arg(long, env = "GREET_LOG_FILE", default_value = "log.txt")]
    pub log_file: PathBuf,

    /// Configuration file path (optional)
    #[arg(long, env = "GREET_CONFIG")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            verbosity: Vec::new(),
            log_file: PathBuf::from("log.txt"),
            config_file: None,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::parse_from(args);
        config.validate()?;
        Ok(config)
    }

    /// Parses CLI arguments (clap's `env` feature fills in environment
    /// fallbacks), then merges values from the optional config file for
    /// fields left at their defaults.
    pub fn from_args_and_env<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::parse_from(args);

        if let Some(config_file) = config.config_file.clone() {
            let base = Config::from_file(&config_file)?;
            let defaults = Config::default();

            // CLI and environment values win; a field still at its default
            // is eligible for replacement by the file's value.
            if config.name == defaults.name && base.name != defaults.name {
                config.name = base.name;
            }
            if config.verbosity.is_empty() && !base.verbosity.is_empty() {
                config.verbosity = base.verbosity;
            }
            if config.log_file == defaults.log_file && base.log_file != defaults.log_file {
                config.log_file = base.log_file;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

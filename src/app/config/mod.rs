mod cli;
mod validation;

use thiserror::Error;

use crate::domain::VerbosityError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid verbosity: {0}")]
    Verbosity(#[from] VerbosityError),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub use cli::Config;

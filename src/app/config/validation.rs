use super::{Config, ConfigError};
use crate::domain::Severity;

impl Config {
    /// Severity threshold for both logging sinks.
    ///
    /// An empty token vector means the verbosity flag was never supplied,
    /// which gets the built-in default (`Info`) without consulting the
    /// resolver. Explicit input of any length goes through
    /// `Severity::resolve`, so repeated flags are rejected rather than
    /// silently taking the first or last value.
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        if self.verbosity.is_empty() {
            return Ok(Severity::default());
        }
        let severity = Severity::resolve(&self.verbosity)?;
        Ok(severity)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.severity()?;
        Ok(())
    }
}

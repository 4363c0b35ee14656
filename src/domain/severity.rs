use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerbosityError {
    #[error("expected exactly one verbosity value, got {count}")]
    InvalidArity { count: usize },

    #[error(
        "invalid verbosity '{input}'. Valid values: Critical, Error, Warning, Info, Debug, Trace or 0-5"
    )]
    InvalidFormat { input: String },

    #[error("verbosity '{input}' is outside the range 0-5")]
    OutOfRange { input: String },
}

/// Severity threshold for the logging sinks.
///
/// Ordered from most to least restrictive: `Critical` shows almost nothing,
/// `Trace` shows everything. The integer form runs 0 = Critical through
/// 5 = Trace (lower number = higher severity), which is also the numeric
/// range accepted on the command line.
///
/// This is distinct from `tracing::Level` (used for configuring the logging
/// infrastructure): tracing has no Critical level, so the conversion in
/// `app::logging` folds it into `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    Critical = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Severity {
    /// All six levels in severity order (most restrictive first).
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Trace => "Trace",
        }
    }

    /// Integer form, 0 = Critical through 5 = Trace.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Level for an integer in [0, 5]; `None` outside that range.
    pub const fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(Severity::Critical),
            1 => Some(Severity::Error),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Info),
            4 => Some(Severity::Debug),
            5 => Some(Severity::Trace),
            _ => None,
        }
    }

    /// Resolves raw `-v` tokens into a severity.
    ///
    /// Exactly one token is required; the zero-token case (flag omitted) is
    /// the caller's concern and gets the caller's default instead. A single
    /// token is matched against the six names first (exact case), then
    /// parsed as a base-10 integer in [0, 5].
    pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Self, VerbosityError> {
        match tokens {
            [token] => token.as_ref().parse(),
            _ => Err(VerbosityError::InvalidArity {
                count: tokens.len(),
            }),
        }
    }
}

impl FromStr for Severity {
    type Err = VerbosityError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // Name lookup takes precedence over the numeric form.
        match token {
            "Critical" => return Ok(Severity::Critical),
            "Error" => return Ok(Severity::Error),
            "Warning" => return Ok(Severity::Warning),
            "Info" => return Ok(Severity::Info),
            "Debug" => return Ok(Severity::Debug),
            "Trace" => return Ok(Severity::Trace),
            _ => {}
        }

        match token.parse::<i64>() {
            Ok(value) => Severity::from_index(value).ok_or_else(|| VerbosityError::OutOfRange {
                input: token.to_string(),
            }),
            // A digit string that overflows i64 still names a number, and
            // that number is not in [0, 5].
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(VerbosityError::OutOfRange {
                    input: token.to_string(),
                })
            }
            Err(_) => Err(VerbosityError::InvalidFormat {
                input: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

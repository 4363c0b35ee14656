//! Domain layer for greet.
//!
//! Contains the canonical types shared across all modules:
//! - `Severity`: the six-value ordered logging threshold
//! - `VerbosityError`: why a verbosity input failed to resolve

pub mod severity;

pub use severity::{Severity, VerbosityError};

//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `ConfigError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// A `TerminalConfig` that cannot be run.
///
/// Raised at construction time; a run never starts with an invalid config.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{what} capacity must be at least 1")]
    ZeroCapacity { what: &'static str },

    #[error("containers per vessel must be at least 1")]
    NoContainers,

    #[error("{what} duration must be at least 1 tick")]
    ZeroDuration { what: &'static str },

    #[error("mean inter-arrival time must be positive and finite, got {0}")]
    InterArrival(f64),
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

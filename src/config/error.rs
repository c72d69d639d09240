//! Errors surfaced while loading and validating settings.

use thiserror::Error;

/// Failure modes of the configuration layer.
///
/// `Other` wraps errors raised by the `config` crate itself; the remaining
/// variants come from this crate's own source selection and validation steps.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    #[error("could not parse configuration: {0}")]
    ParseError(String),

    /// A loaded value failed a settings-level check.
    #[error("invalid setting {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("environment variable error: {0}")]
    EnvVarError(String),

    /// `ROSTER_CONFIG_DIR` and `ROSTER_CONFIG_FILE` were both set.
    #[error("conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

//! Error types for the timber logging facility.
//!
//! Every failure is recovered inside the logging call and surfaced to the
//! caller as a variant of [`LogError`]; nothing here panics and nothing is
//! retried. Suppression by the configured threshold is not an error.

use thiserror::Error;

/// Top-level error type for logging operations.
#[derive(Error, Debug)]
pub enum LogError {
    /// Configuration could not be loaded for this call
    #[error("Configuration unavailable: {0}")]
    Config(#[from] ConfigError),

    /// Caller passed a severity ordinal outside the defined set
    #[error("Invalid severity ordinal: {0}")]
    InvalidSeverity(u8),

    /// The destination file could not be appended to
    #[error("Failed to append to log destination: {0}")]
    Write(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience type alias for timber results.
pub type Result<T> = std::result::Result<T, LogError>;

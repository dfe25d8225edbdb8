//! Timber - Minimal configuration-driven file logger.
//!
//! Timber is a single-entry-point logging facility: every call re-reads a
//! flat TOML configuration, filters the message against the configured
//! severity threshold, composes a prefix from the enabled display fields
//! (timestamp, severity name, caller file/line, caller class/function),
//! and appends one line to the configured destination file.
//!
//! # Architecture
//!
//! ```text
//! log(severity, message) → load config → threshold filter → format prefix → append line
//! ```
//!
//! There is no state between calls: no cached configuration, no open file
//! handle, no background work. Suppressed messages are a successful
//! outcome; only an unavailable configuration, an invalid severity
//! ordinal, or a failed append is an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use timber::{Logger, Severity};
//!
//! fn main() -> timber::Result<()> {
//!     let logger = Logger::from_default_file();
//!     logger.log(Severity::Info, "pipeline started")?;
//!     logger.error("pipeline wedged")?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod emitter;
pub mod error;
pub mod format;
pub mod record;
pub mod severity;

// Re-exports for convenient access
pub use config::{ConfigSource, FileSource, LogConfig, StaticSource, DEFAULT_CONFIG_FILE};
pub use emitter::{Emission, Logger};
pub use error::{ConfigError, LogError, Result};
pub use record::{CallerContext, LogRecord};
pub use severity::{severity_name, Severity, Threshold};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

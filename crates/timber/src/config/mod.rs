//! Configuration for the logger.
//!
//! Configuration is a flat TOML document (`timber.toml` in the working
//! directory by default) and is re-read on every logging call; nothing is
//! cached between calls, so edits to the file take effect immediately.

mod source;

pub use source::{ConfigSource, FileSource, StaticSource};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::severity::{Severity, Threshold};

/// Default configuration file location, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "timber.toml";

/// Logger configuration, loaded fresh for every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Threshold severity name (`ERROR`..`DEBUG`, or `NONE` to disable).
    /// Empty means unset and resolves to `ERROR`.
    pub severity: String,

    /// Prefix the timestamp
    pub display_date: bool,

    /// Prefix the severity name
    pub display_severity: bool,

    /// Prefix the call-site file path
    pub display_file: bool,

    /// Prefix the call-site line number
    pub display_line: bool,

    /// Prefix the enclosing type name, when one was captured
    pub display_class: bool,

    /// Prefix the enclosing function name
    pub display_function: bool,

    /// Destination file, appended to on every emitted line. Supports `~`.
    pub log_file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            severity: String::new(),
            display_date: false,
            display_severity: false,
            display_file: false,
            display_line: false,
            display_class: false,
            display_function: false,
            log_file: "timber.log".to_string(),
        }
    }
}

impl LogConfig {
    /// Parse a configuration document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the configured threshold.
    ///
    /// An absent or empty severity key defaults to `ERROR`; everything
    /// else goes through [`Threshold::from_config_name`].
    pub fn threshold(&self) -> Threshold {
        if self.severity.is_empty() {
            Threshold::Enabled(Severity::Error)
        } else {
            Threshold::from_config_name(&self.severity)
        }
    }

    /// The destination path with `~` expanded.
    pub fn destination(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert!(config.severity.is_empty());
        assert!(!config.display_date);
        assert!(!config.display_function);
        assert_eq!(config.log_file, "timber.log");
    }

    #[test]
    fn test_from_toml_with_all_keys() {
        let config = LogConfig::from_toml(
            r#"
            severity = "INFO"
            display_date = true
            display_severity = true
            display_file = true
            display_line = true
            display_class = true
            display_function = true
            log_file = "/var/log/app.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.threshold(), Threshold::Enabled(Severity::Info));
        assert!(config.display_date);
        assert!(config.display_class);
        assert_eq!(config.log_file, "/var/log/app.log");
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = LogConfig::from_toml("log_file = \"out.log\"").unwrap();
        assert!(config.severity.is_empty());
        assert!(!config.display_severity);
        assert_eq!(config.log_file, "out.log");
    }

    #[test]
    fn test_threshold_defaults_to_error_when_unset() {
        let config = LogConfig::default();
        assert_eq!(config.threshold(), Threshold::Enabled(Severity::Error));
    }

    #[test]
    fn test_threshold_none_disables() {
        let config = LogConfig {
            severity: "NONE".to_string(),
            ..LogConfig::default()
        };
        assert_eq!(config.threshold(), Threshold::Disabled);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = LogConfig::from_toml("severity = [not toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_destination_expands_tilde() {
        let config = LogConfig {
            log_file: "~/logs/app.log".to_string(),
            ..LogConfig::default()
        };
        let destination = config.destination();
        assert!(!destination.to_string_lossy().starts_with('~'));
        assert!(destination.ends_with("logs/app.log"));
    }
}

//! Configuration sources.
//!
//! The logger pulls configuration through [`ConfigSource`] once per call.
//! The file-backed source hits the filesystem every time; the static
//! source hands back a fixed value so tests and embedders can run without
//! a real file.

use std::path::{Path, PathBuf};

use crate::config::{LogConfig, DEFAULT_CONFIG_FILE};
use crate::error::ConfigError;

/// Where configuration comes from.
///
/// `load` is invoked once per logging call; implementations must not hold
/// stale state across calls.
pub trait ConfigSource: Send + Sync {
    /// Produce the configuration for one logging call.
    fn load(&self) -> Result<LogConfig, ConfigError>;
}

/// File-backed configuration source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading from a specific path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<LogConfig, ConfigError> {
        let content = std::fs::read_to_string(&self.path)?;
        LogConfig::from_toml(&content)
    }
}

/// Fixed configuration source.
#[derive(Debug, Clone)]
pub struct StaticSource(pub LogConfig);

impl ConfigSource for StaticSource {
    fn load(&self) -> Result<LogConfig, ConfigError> {
        Ok(self.0.clone())
    }
}

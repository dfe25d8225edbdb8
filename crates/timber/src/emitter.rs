//! The logging entry point.
//!
//! Wires the pieces together for one call: load configuration, filter
//! against the threshold, assemble the record, format, append. The logger
//! keeps no open file handle and no cached configuration; every call
//! stands alone.

use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;

use crate::config::{ConfigSource, FileSource, LogConfig};
use crate::error::{LogError, Result};
use crate::format;
use crate::record::{CallerContext, LogRecord};
use crate::severity::Severity;

/// Outcome of a successful logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// The line was appended to the destination
    Written,

    /// The message was filtered out by the configured threshold
    Suppressed,
}

impl Emission {
    /// Whether a line actually reached the destination.
    pub fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Configuration-driven file logger.
///
/// Each call re-reads configuration from its source, filters the message
/// against the configured threshold, and appends at most one line to the
/// destination file. Suppression is a successful outcome; only an
/// unavailable configuration, an out-of-set severity ordinal, or a failed
/// append is an error.
pub struct Logger {
    source: Box<dyn ConfigSource>,
}

impl Logger {
    /// Logger backed by the given configuration source.
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        tracing::debug!("Initializing timber v{}", crate::VERSION);
        Self {
            source: Box::new(source),
        }
    }

    /// Logger reading `timber.toml` from the working directory.
    pub fn from_default_file() -> Self {
        Self::new(FileSource::default())
    }

    /// Log a message, capturing the call site.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) -> Result<Emission> {
        self.log_with(severity, message, CallerContext::capture())
    }

    /// Log a message with an explicitly assembled caller context.
    ///
    /// For callers that attach their enclosing scope to the prefix:
    ///
    /// ```rust,ignore
    /// let ctx = CallerContext::capture().with_class("Dispatcher").with_function("drain");
    /// logger.log_with(Severity::Info, "drained", ctx)?;
    /// ```
    pub fn log_with(
        &self,
        severity: Severity,
        message: &str,
        caller: CallerContext,
    ) -> Result<Emission> {
        let config = self.source.load()?;
        self.emit(&config, severity, message, caller)
    }

    /// Log a message carrying a raw severity ordinal.
    ///
    /// Ordinals outside the defined set are rejected without output.
    #[track_caller]
    pub fn log_ordinal(&self, raw: u8, message: &str) -> Result<Emission> {
        let caller = CallerContext::capture();
        let config = self.source.load()?;
        let severity = Severity::from_ordinal(raw).ok_or(LogError::InvalidSeverity(raw))?;
        self.emit(&config, severity, message, caller)
    }

    /// Log at `ERROR`.
    #[track_caller]
    pub fn error(&self, message: &str) -> Result<Emission> {
        self.log(Severity::Error, message)
    }

    /// Log at `WARNING`.
    #[track_caller]
    pub fn warning(&self, message: &str) -> Result<Emission> {
        self.log(Severity::Warning, message)
    }

    /// Log at `INFO`.
    #[track_caller]
    pub fn info(&self, message: &str) -> Result<Emission> {
        self.log(Severity::Info, message)
    }

    /// Log at `TRACE`.
    #[track_caller]
    pub fn trace(&self, message: &str) -> Result<Emission> {
        self.log(Severity::Trace, message)
    }

    /// Log at `DEBUG`.
    #[track_caller]
    pub fn debug(&self, message: &str) -> Result<Emission> {
        self.log(Severity::Debug, message)
    }

    fn emit(
        &self,
        config: &LogConfig,
        severity: Severity,
        message: &str,
        caller: CallerContext,
    ) -> Result<Emission> {
        if !config.threshold().allows(severity) {
            tracing::trace!(%severity, "Message suppressed by configured threshold");
            return Ok(Emission::Suppressed);
        }

        let record = LogRecord {
            severity,
            message,
            timestamp: Local::now(),
            caller,
        };
        let mut line = format::format_line(config, &record);
        line.push('\n');

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(config.destination())?;
        // One write of the complete line, so concurrent appenders cannot
        // interleave mid-record.
        file.write_all(line.as_bytes())?;
        Ok(Emission::Written)
    }
}

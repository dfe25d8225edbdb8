//! Severity levels and the configured verbosity threshold.
//!
//! Severities carry fixed ordinals ordered by urgency: `ERROR` is 0 and
//! `DEBUG` is 4, so a lower ordinal means a more urgent message. The
//! threshold admits every message at or below its own ordinal and rejects
//! anything more verbose.

use std::fmt;

use crate::error::LogError;

/// Severity of a log message, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Failures that need attention
    Error = 0,

    /// Soft issues worth flagging
    Warning = 1,

    /// Routine informational messages
    Info = 2,

    /// Control-flow tracing
    Trace = 3,

    /// Most verbose diagnostic output
    Debug = 4,
}

impl Severity {
    /// All severities in ordinal order.
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Trace,
        Severity::Debug,
    ];

    /// Map a raw ordinal to a severity. Returns `None` outside `0..=4`.
    pub fn from_ordinal(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Error),
            1 => Some(Self::Warning),
            2 => Some(Self::Info),
            3 => Some(Self::Trace),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// The ordinal value (0 = most urgent).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Canonical uppercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(raw: u8) -> Result<Self, LogError> {
        Self::from_ordinal(raw).ok_or(LogError::InvalidSeverity(raw))
    }
}

/// Display name for a raw ordinal, falling back to `"UNKNOWN"` for values
/// outside the defined set.
pub fn severity_name(raw: u8) -> &'static str {
    Severity::from_ordinal(raw).map_or("UNKNOWN", Severity::name)
}

/// The configured verbosity ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Nothing is emitted (config value `NONE`, or an unrecognized name)
    Disabled,

    /// Messages at or more urgent than this severity are emitted
    Enabled(Severity),
}

impl Threshold {
    /// Parse a threshold from configuration text.
    ///
    /// The five canonical severity names enable logging at that level;
    /// `NONE` and anything unrecognized disable logging entirely. Matching
    /// is exact, uppercase.
    pub fn from_config_name(name: &str) -> Self {
        match name {
            "ERROR" => Self::Enabled(Severity::Error),
            "WARNING" => Self::Enabled(Severity::Warning),
            "INFO" => Self::Enabled(Severity::Info),
            "TRACE" => Self::Enabled(Severity::Trace),
            "DEBUG" => Self::Enabled(Severity::Debug),
            _ => Self::Disabled,
        }
    }

    /// Whether a message at `severity` passes the filter.
    pub fn allows(self, severity: Severity) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled(limit) => severity.ordinal() <= limit.ordinal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ordinal_accepts_defined_set() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_ordinal(severity.ordinal()), Some(severity));
        }
        assert_eq!(Severity::from_ordinal(5), None);
        assert_eq!(Severity::from_ordinal(99), None);
    }

    #[test]
    fn test_name_round_trips_with_config_parsing() {
        for severity in Severity::ALL {
            assert_eq!(
                Threshold::from_config_name(severity.name()),
                Threshold::Enabled(severity)
            );
        }
    }

    #[test]
    fn test_severity_name_falls_back_to_unknown() {
        assert_eq!(severity_name(0), "ERROR");
        assert_eq!(severity_name(4), "DEBUG");
        assert_eq!(severity_name(5), "UNKNOWN");
        assert_eq!(severity_name(255), "UNKNOWN");
    }

    #[test]
    fn test_try_from_rejects_out_of_set_ordinal() {
        assert!(matches!(
            Severity::try_from(99),
            Err(LogError::InvalidSeverity(99))
        ));
    }

    #[test]
    fn test_none_and_unknown_names_disable_logging() {
        assert_eq!(Threshold::from_config_name("NONE"), Threshold::Disabled);
        assert_eq!(Threshold::from_config_name("VERBOSE"), Threshold::Disabled);
        // Matching is case-sensitive, like the config format it reads.
        assert_eq!(Threshold::from_config_name("error"), Threshold::Disabled);
        for severity in Severity::ALL {
            assert!(!Threshold::Disabled.allows(severity));
        }
    }

    #[test]
    fn test_threshold_admits_equal_or_more_urgent() {
        let threshold = Threshold::Enabled(Severity::Info);
        assert!(threshold.allows(Severity::Error));
        assert!(threshold.allows(Severity::Warning));
        assert!(threshold.allows(Severity::Info));
        assert!(!threshold.allows(Severity::Trace));
        assert!(!threshold.allows(Severity::Debug));
    }
}

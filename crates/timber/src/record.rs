//! Call-site capture and the record handed to the formatter.

use std::panic::Location;

use chrono::{DateTime, Local};

use crate::severity::Severity;

/// Where a logging call originated.
///
/// File and line describe the immediate call site and come from the
/// compiler via `#[track_caller]`. The enclosing class and function names
/// are attached explicitly by callers that want them in the prefix; the
/// runtime has no frame reflection to discover them on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    /// Source file of the call site
    pub file: &'static str,

    /// Line number of the call site
    pub line: u32,

    /// Enclosing type name, if any
    pub class: Option<String>,

    /// Enclosing function name, if any
    pub function: Option<String>,
}

impl CallerContext {
    /// Capture the immediate call site, with no enclosing scope attached.
    #[track_caller]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            class: None,
            function: None,
        }
    }

    /// Attach the enclosing type name.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Attach the enclosing function name.
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

/// One log line before formatting.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    /// Message severity
    pub severity: Severity,

    /// Message body
    pub message: &'a str,

    /// Wall-clock time the call was made
    pub timestamp: DateTime<Local>,

    /// Where the call came from
    pub caller: CallerContext,
}

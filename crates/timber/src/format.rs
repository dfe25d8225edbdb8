//! Prefix composition.
//!
//! A line is the enabled prefix segments, in fixed order, followed by the
//! message body: `[timestamp]` `[SEVERITY]` `[file:line]`
//! `[Class::function()]`. Each segment appears only when its display flag
//! is on; a fully disabled configuration yields the bare message.

use crate::config::LogConfig;
use crate::record::LogRecord;

/// Timestamp layout used in the date segment.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Scope name used when a call originated outside any function.
const ROOT_SCOPE: &str = "__root__";

/// Build one complete output line (without terminator) for a record.
pub fn format_line(config: &LogConfig, record: &LogRecord<'_>) -> String {
    let mut line = String::new();

    if config.display_date {
        line.push_str(&format!(
            "[{}]",
            record.timestamp.format(TIMESTAMP_FORMAT)
        ));
    }

    if config.display_severity {
        line.push_str(&format!("[{}]", record.severity.name()));
    }

    if config.display_file || config.display_line {
        line.push('[');
        if config.display_file {
            line.push_str(record.caller.file);
        }
        if config.display_line {
            // The colon separates file from line only when both are shown.
            if config.display_file {
                line.push(':');
            }
            line.push_str(&record.caller.line.to_string());
        }
        line.push(']');
    }

    if config.display_class || config.display_function {
        line.push('[');
        if config.display_class {
            if let Some(class) = record.caller.class.as_deref() {
                line.push_str(class);
            }
        }
        if config.display_function {
            if config.display_class && record.caller.class.is_some() {
                line.push_str("::");
            }
            match record.caller.function.as_deref() {
                Some(function) => {
                    line.push_str(function);
                    line.push_str("()");
                }
                None => line.push_str(ROOT_SCOPE),
            }
        }
        line.push(']');
    }

    if !line.is_empty() {
        line.push(' ');
    }

    line.push_str(record.message);
    line
}

//! Structured JSON logger for docquery
//!
//! - One log line = one event
//! - `event` first, `severity` second, remaining keys sorted
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Per-query detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    ///
    /// ERROR goes to stderr, everything else to stdout.
    pub fn log(severity: Severity, event: Event, fields: &[(&str, &str)]) {
        if severity >= Severity::Error {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    /// Returns true if `severity` reaches `threshold`.
    ///
    /// A `None` threshold disables logging.
    pub fn enabled(threshold: Option<Severity>, severity: Severity) -> bool {
        threshold.map_or(false, |min| severity >= min)
    }

    /// Log an event only if it passes `enabled`
    pub fn log_at(
        threshold: Option<Severity>,
        severity: Severity,
        event: Event,
        fields: &[(&str, &str)],
    ) {
        if Self::enabled(threshold, severity) {
            Self::log(severity, event, fields);
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: Event,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::format_line(severity, event, fields);
        // Logging never fails the caller
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn format_line(severity: Severity, event: Event, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(128);

        output.push_str("{\"event\":");
        Self::push_json_string(&mut output, event.as_str());
        output.push_str(",\"severity\":");
        Self::push_json_string(&mut output, severity.as_str());

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push(',');
            Self::push_json_string(&mut output, key);
            output.push(':');
            Self::push_json_string(&mut output, value);
        }

        output.push_str("}\n");
        output
    }

    fn push_json_string(output: &mut String, s: &str) {
        // Serializing a &str cannot fail
        match serde_json::to_string(s) {
            Ok(quoted) => output.push_str(&quoted),
            Err(_) => output.push_str("\"\""),
        }
    }
}

/// Capture a log line for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: Event, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_enabled_none_threshold_disables() {
        assert!(!Logger::enabled(None, Severity::Trace));
        assert!(!Logger::enabled(None, Severity::Error));
    }

    #[test]
    fn test_enabled_below_threshold_suppressed() {
        assert!(!Logger::enabled(Some(Severity::Warn), Severity::Trace));
        assert!(!Logger::enabled(Some(Severity::Warn), Severity::Info));
    }

    #[test]
    fn test_enabled_at_and_above_threshold() {
        assert!(Logger::enabled(Some(Severity::Warn), Severity::Warn));
        assert!(Logger::enabled(Some(Severity::Warn), Severity::Error));
        assert!(Logger::enabled(Some(Severity::Trace), Severity::Trace));
    }

    #[test]
    fn test_severity_deserializes_uppercase() {
        let s: Severity = serde_json::from_str("\"TRACE\"").unwrap();
        assert_eq!(s, Severity::Trace);
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(Severity::Info, Event::QueryFilter, &[]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "QUERY_FILTER");
        assert_eq!(parsed["severity"], "INFO");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let output1 = capture_log(
            Severity::Trace,
            Event::QueryFindFirst,
            &[("scanned", "3"), ("conditions", "{id}"), ("matched", "1")],
        );
        let output2 = capture_log(
            Severity::Trace,
            Event::QueryFindFirst,
            &[("matched", "1"), ("scanned", "3"), ("conditions", "{id}")],
        );
        assert_eq!(output1, output2);

        let conditions_pos = output1.find("conditions").unwrap();
        let matched_pos = output1.find("matched").unwrap();
        let scanned_pos = output1.find("scanned").unwrap();
        assert!(conditions_pos < matched_pos);
        assert!(matched_pos < scanned_pos);
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture_log(
            Severity::Info,
            Event::QueryFilter,
            &[("message", "hello \"world\"\nline2")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["message"], "hello \"world\"\nline2");
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
    }

    #[test]
    fn test_log_event_first() {
        let output = capture_log(Severity::Info, Event::QueryRecordNotFound, &[("a", "1")]);

        let event_pos = output.find("\"event\"").unwrap();
        let severity_pos = output.find("\"severity\"").unwrap();
        let field_pos = output.find("\"a\"").unwrap();
        assert!(event_pos < severity_pos);
        assert!(severity_pos < field_pos);
    }
}

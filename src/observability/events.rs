//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in docquery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Query operations
    /// First-match lookup evaluated
    QueryFindFirst,
    /// Filter produced a new engine
    QueryFilter,
    /// Or-fail lookup found nothing
    QueryRecordNotFound,

    // Field lookup
    /// Lookup by a field no record carries
    LookupUnknownField,
}

impl Event {
    /// Returns the event name for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::QueryFindFirst => "QUERY_FIND_FIRST",
            Event::QueryFilter => "QUERY_FILTER",
            Event::QueryRecordNotFound => "QUERY_RECORD_NOT_FOUND",
            Event::LookupUnknownField => "LOOKUP_UNKNOWN_FIELD",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

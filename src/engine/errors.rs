//! Query engine error types
//!
//! Error codes:
//! - DOCQ_RECORD_NOT_FOUND (ERROR)
//! - DOCQ_CONFIG_INVALID (ERROR)

use std::fmt;

use thiserror::Error;

/// Query error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// No record satisfied an or-fail lookup
    DocqRecordNotFound,
}

impl QueryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::DocqRecordNotFound => "DOCQ_RECORD_NOT_FOUND",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The single query-domain error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No record matched the conditions
    #[error("DOCQ_RECORD_NOT_FOUND: no record matches {conditions}")]
    RecordNotFound {
        /// Field layout of the condition set that failed
        conditions: String,
    },
}

impl QueryError {
    /// Create a record-not-found error
    pub fn record_not_found(conditions: impl Into<String>) -> Self {
        QueryError::RecordNotFound {
            conditions: conditions.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        match self {
            QueryError::RecordNotFound { .. } => QueryErrorCode::DocqRecordNotFound,
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config text could not be parsed
    #[error("DOCQ_CONFIG_INVALID: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Parse(_) => "DOCQ_CONFIG_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QueryErrorCode::DocqRecordNotFound.code(),
            "DOCQ_RECORD_NOT_FOUND"
        );
        assert_eq!(ConfigError::Parse("x".into()).code(), "DOCQ_CONFIG_INVALID");
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::record_not_found("{id}");
        let display = format!("{}", err);
        assert!(display.contains("DOCQ_RECORD_NOT_FOUND"));
        assert!(display.contains("{id}"));
        assert_eq!(err.code(), QueryErrorCode::DocqRecordNotFound);
    }
}

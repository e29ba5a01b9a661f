//! Field lookup errors

use thiserror::Error;

use crate::engine::QueryError;

/// Errors raised by field lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No record carries the field at the top level
    #[error("DOCQ_UNKNOWN_FIELD: no record has field '{0}'")]
    UnknownField(String),

    /// The field is known but no record matched
    #[error(transparent)]
    NotFound(#[from] QueryError),
}

impl LookupError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::UnknownField(_) => "DOCQ_UNKNOWN_FIELD",
            LookupError::NotFound(inner) => inner.code().code(),
        }
    }
}

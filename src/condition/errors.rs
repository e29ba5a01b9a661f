//! Condition construction errors

use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a condition set from a literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The literal was not a JSON object
    #[error("DOCQ_CONDITION_NOT_MAPPING: condition set must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}

impl ConditionError {
    pub(crate) fn not_a_mapping(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        ConditionError::NotAMapping { found }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConditionError::NotAMapping { .. } => "DOCQ_CONDITION_NOT_MAPPING",
        }
    }
}

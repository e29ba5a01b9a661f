//! Condition evaluation against records
//!
//! Evaluates condition sets strictly. No type coercion between kinds:
//! `1` and `"1"` differ. Numbers compare by value, so `1` equals `1.0`.
//!
//! A record "has" a field when the key is present, even if its value is
//! null. Absent fields never match a non-predicate condition. Predicates
//! see the raw lookup (`None` for absent) and decide for themselves.

use serde_json::Value;

use super::ast::{Condition, ConditionSet, Record};

/// Evaluates condition sets against records
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Checks if a record matches every condition in the set.
    ///
    /// An empty set matches every record.
    pub fn matches(record: &Record, conditions: &ConditionSet) -> bool {
        // AND semantics
        conditions
            .iter()
            .all(|(field, condition)| Self::matches_condition(record, field, condition))
    }

    /// Checks a single field condition
    fn matches_condition(record: &Record, field: &str, condition: &Condition) -> bool {
        match (condition, record.get(field)) {
            // Predicates are exempt from the presence check
            (Condition::Predicate(predicate), field_value) => predicate.call(field_value),
            // Absent field = no match
            (_, None) => false,
            (Condition::Equals(expected), Some(field_value)) => {
                Self::values_equal(field_value, expected)
            }
            (Condition::OneOf(candidates), Some(field_value)) => candidates
                .iter()
                .any(|candidate| Self::values_equal(field_value, candidate)),
            (Condition::Nested(nested), Some(field_value)) => {
                Self::nested_match(field_value, nested)
            }
        }
    }

    /// Value equality; numbers compare numerically across int/float
    fn values_equal(actual: &Value, expected: &Value) -> bool {
        match (actual, expected) {
            (Value::Number(a), Value::Number(b)) => {
                if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
                    return ai == bi;
                }
                if let (Some(au), Some(bu)) = (a.as_u64(), b.as_u64()) {
                    return au == bu;
                }
                match (a.as_f64(), b.as_f64()) {
                    (Some(af), Some(bf)) => af == bf,
                    _ => false,
                }
            }
            _ => actual == expected,
        }
    }

    /// Recurse into a nested record; non-mapping values never match
    fn nested_match(field_value: &Value, nested: &ConditionSet) -> bool {
        match field_value {
            Value::Object(inner) => Self::matches(inner, nested),
            _ => false,
        }
    }
}

//! Field lookup for docquery
//!
//! A "find by field" surface over a query engine. The set of known fields
//! is the table of top-level keys across all records; looking up by any
//! other field is an error rather than a silent miss.

mod errors;

pub use errors::LookupError;

use std::collections::HashSet;

use serde_json::Value;

use crate::condition::{Condition, ConditionSet, Record};
use crate::engine::QueryEngine;
use crate::observability::{Event, Logger, Severity};

/// Single-field lookups against an engine
pub struct FieldLookup<'a> {
    engine: &'a QueryEngine,
    fields: Vec<String>,
}

impl<'a> FieldLookup<'a> {
    /// Builds the field table from the engine's records (first-seen order)
    pub fn new(engine: &'a QueryEngine) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut fields: Vec<String> = Vec::new();
        for key in engine.iter().flat_map(Record::keys) {
            if seen.insert(key.as_str()) {
                fields.push(key.clone());
            }
        }
        Self { engine, fields }
    }

    /// Returns the known top-level fields
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns true if some record carries the field
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Finds the first record whose `field` matches `value`.
    ///
    /// `value` is read as a condition literal: an array is a membership
    /// test and an object a nested condition set.
    pub fn find_by(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Option<&'a Record>, LookupError> {
        let conditions = self.single_field(field, value)?;
        Ok(self.engine.find_first(&conditions))
    }

    /// Like `find_by`, but a miss is `LookupError::NotFound`
    pub fn find_by_or_fail(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<&'a Record, LookupError> {
        let conditions = self.single_field(field, value)?;
        Ok(self.engine.find_first_or_fail(&conditions)?)
    }

    fn single_field(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<ConditionSet, LookupError> {
        if !self.has_field(field) {
            Logger::log_at(
                self.engine.config().log_level,
                Severity::Warn,
                Event::LookupUnknownField,
                &[("field", field)],
            );
            return Err(LookupError::UnknownField(field.to_string()));
        }
        let value: Value = value.into();
        Ok(ConditionSet::new().with(field, Condition::from(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> QueryEngine {
        let data = json!([
            {"id": "a1", "name": "John Doe"},
            {"id": "b2", "biometrics": {"height": 200}}
        ]);
        match data {
            Value::Array(values) => values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => panic!("fixture must be an array"),
        }
    }

    #[test]
    fn test_fields_first_seen_order() {
        let engine = engine();
        let lookup = FieldLookup::new(&engine);
        assert_eq!(lookup.fields(), ["id", "name", "biometrics"]);
        assert!(lookup.has_field("biometrics"));
        assert!(!lookup.has_field("height"));
    }

    #[test]
    fn test_fields_deduplicated_across_records() {
        let engine: QueryEngine = (0..50)
            .filter_map(|i| json!({"id": i, "name": "x", "extra": i}).as_object().cloned())
            .collect();
        let lookup = FieldLookup::new(&engine);
        assert_eq!(lookup.fields(), ["extra", "id", "name"]);
    }

    #[test]
    fn test_find_by_known_field() {
        let engine = engine();
        let lookup = FieldLookup::new(&engine);

        let found = lookup.find_by("id", "b2").unwrap();
        assert_eq!(found.and_then(|r| r.get("id")), Some(&json!("b2")));
        assert_eq!(lookup.find_by("id", "zz").unwrap(), None);
    }

    #[test]
    fn test_find_by_unknown_field() {
        let engine = engine();
        let lookup = FieldLookup::new(&engine);

        let err = lookup.find_by("height", 200).unwrap_err();
        assert_eq!(err, LookupError::UnknownField("height".to_string()));
    }

    #[test]
    fn test_find_by_nested_literal() {
        let engine = engine();
        let lookup = FieldLookup::new(&engine);

        let found = lookup.find_by("biometrics", json!({"height": 200})).unwrap();
        assert_eq!(found.and_then(|r| r.get("id")), Some(&json!("b2")));
    }

    #[test]
    fn test_find_by_or_fail() {
        let engine = engine();
        let lookup = FieldLookup::new(&engine);

        assert!(lookup.find_by_or_fail("name", "John Doe").is_ok());
        let err = lookup.find_by_or_fail("name", "Jane").unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
        assert_eq!(err.code(), "DOCQ_RECORD_NOT_FOUND");
    }
}

//! Condition structures
//!
//! Defines the tagged representation of a condition set. Every condition
//! value is exactly one of: literal equality, membership, nested set, or
//! a caller-supplied predicate.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::errors::ConditionError;

/// A record: field name to value
pub type Record = Map<String, Value>;

/// A unary predicate over a field value.
///
/// Receives `None` when the field is absent from the record and
/// `Some(&Value::Null)` when the field is present and null.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>);

impl Predicate {
    /// Wrap a closure as a predicate
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the predicate
    pub fn call(&self, value: Option<&Value>) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(<fn>)")
    }
}

/// A single condition value
#[derive(Debug, Clone)]
pub enum Condition {
    /// Exact equality: field == value (null included)
    Equals(Value),
    /// Membership: field is one of the values
    OneOf(Vec<Value>),
    /// Nested condition set applied to a nested record
    Nested(ConditionSet),
    /// Caller-supplied predicate, authoritative for the field
    Predicate(Predicate),
}

impl Condition {
    /// Create an equality condition
    pub fn equals(value: impl Into<Value>) -> Self {
        Condition::Equals(value.into())
    }

    /// Create a membership condition
    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Condition::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Create a predicate condition
    pub fn matching<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Condition::Predicate(Predicate::new(f))
    }
}

/// Literal conversion: arrays are membership tests, objects recurse,
/// everything else is compared by equality.
impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Condition::OneOf(values),
            Value::Object(map) => Condition::Nested(ConditionSet::from(map)),
            other => Condition::Equals(other),
        }
    }
}

impl From<ConditionSet> for Condition {
    fn from(set: ConditionSet) -> Self {
        Condition::Nested(set)
    }
}

impl From<Predicate> for Condition {
    fn from(predicate: Predicate) -> Self {
        Condition::Predicate(predicate)
    }
}

/// Field-to-condition mapping, logically ANDed.
///
/// Insertion order is kept; inserting an existing field replaces its
/// condition in place.
#[derive(Debug, Clone, Default)]
pub struct ConditionSet {
    entries: Vec<(String, Condition)>,
}

impl ConditionSet {
    /// Create an empty set (matches every record)
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a condition for a field, replacing any existing one
    pub fn insert(&mut self, field: impl Into<String>, condition: impl Into<Condition>) {
        let field = field.into();
        let condition = condition.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = condition,
            None => self.entries.push((field, condition)),
        }
    }

    /// Builder form of `insert`
    pub fn with(mut self, field: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.insert(field, condition);
        self
    }

    /// Add an equality condition
    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, Condition::equals(value))
    }

    /// Add a membership condition
    pub fn one_of<I, V>(self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.with(field, Condition::one_of(values))
    }

    /// Add a nested condition set
    pub fn nested(self, field: impl Into<String>, set: ConditionSet) -> Self {
        self.with(field, Condition::Nested(set))
    }

    /// Add a predicate condition
    pub fn matching<F>(self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.with(field, Condition::matching(f))
    }

    /// Field-wise union. Conditions in `other` win on collision.
    pub fn merge(mut self, other: ConditionSet) -> Self {
        for (field, condition) in other.entries {
            self.insert(field, condition);
        }
        self
    }

    /// Returns the condition for a field, if any
    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, c)| c)
    }

    /// Returns the number of top-level conditions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no conditions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the top-level field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    /// Iterate over (field, condition) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries.iter().map(|(f, c)| (f.as_str(), c))
    }
}

impl From<Map<String, Value>> for ConditionSet {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .fold(ConditionSet::new(), |set, (field, value)| {
                set.with(field, Condition::from(value))
            })
    }
}

impl TryFrom<Value> for ConditionSet {
    type Error = ConditionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(ConditionSet::from(map)),
            other => Err(ConditionError::not_a_mapping(&other)),
        }
    }
}

impl<K: Into<String>, C: Into<Condition>> FromIterator<(K, C)> for ConditionSet {
    fn from_iter<T: IntoIterator<Item = (K, C)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ConditionSet::new(), |set, (field, condition)| {
                set.with(field, condition)
            })
    }
}

/// Renders the field layout, e.g. `{address: {country}, id}`
impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, condition)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field)?;
            if let Condition::Nested(set) = condition {
                write!(f, ": {}", set)?;
            }
        }
        f.write_str("}")
    }
}

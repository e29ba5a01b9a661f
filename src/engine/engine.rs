//! Query engine for docquery
//!
//! Wraps an ordered, immutable collection of records. Every operation is a
//! pure read; `filter` returns a new engine sharing the surviving records
//! with its parent.

use std::fmt;
use std::sync::Arc;

use crate::condition::{ConditionEvaluator, ConditionSet, Record};
use crate::observability::{Event, Logger, Severity};

use super::config::EngineConfig;
use super::errors::{QueryError, QueryResult};

/// Immutable query engine over an ordered record collection
#[derive(Clone)]
pub struct QueryEngine {
    records: Vec<Arc<Record>>,
    config: EngineConfig,
}

impl QueryEngine {
    /// Creates a new engine, taking ownership of the records
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_config(records, EngineConfig::default())
    }

    /// Creates a new engine with explicit configuration
    pub fn with_config(records: Vec<Record>, config: EngineConfig) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
            config,
        }
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the first record matching all conditions, in collection order
    pub fn find_first(&self, conditions: &ConditionSet) -> Option<&Record> {
        let position = self
            .records
            .iter()
            .position(|record| ConditionEvaluator::matches(record, conditions));

        let scanned = position.map_or(self.records.len(), |p| p + 1);
        self.log(
            Severity::Trace,
            Event::QueryFindFirst,
            conditions,
            scanned,
            usize::from(position.is_some()),
        );

        position.map(|p| self.records[p].as_ref())
    }

    /// Like `find_first`, but fails with `RecordNotFound` when nothing matches
    pub fn find_first_or_fail(&self, conditions: &ConditionSet) -> QueryResult<&Record> {
        match self.find_first(conditions) {
            Some(record) => Ok(record),
            None => {
                self.log(
                    Severity::Error,
                    Event::QueryRecordNotFound,
                    conditions,
                    self.records.len(),
                    0,
                );
                Err(QueryError::record_not_found(conditions.to_string()))
            }
        }
    }

    /// Returns a new engine holding only the matching records.
    ///
    /// Relative order is preserved; the receiver is untouched.
    pub fn filter(&self, conditions: &ConditionSet) -> QueryEngine {
        let records: Vec<Arc<Record>> = self
            .records
            .iter()
            .filter(|record| ConditionEvaluator::matches(record, conditions))
            .cloned()
            .collect();

        self.log(
            Severity::Trace,
            Event::QueryFilter,
            conditions,
            self.records.len(),
            records.len(),
        );

        QueryEngine {
            records,
            config: self.config,
        }
    }

    /// Returns the number of records matching the conditions
    pub fn count(&self, conditions: &ConditionSet) -> usize {
        self.records
            .iter()
            .filter(|record| ConditionEvaluator::matches(record, conditions))
            .count()
    }

    /// Returns true if any record matches the conditions
    pub fn exists(&self, conditions: &ConditionSet) -> bool {
        self.records
            .iter()
            .any(|record| ConditionEvaluator::matches(record, conditions))
    }

    /// Returns an iterator over the records in collection order.
    ///
    /// The engine is not consumed; iterating again yields the same sequence.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the engine holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an owned snapshot of the records
    pub fn records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    fn log(
        &self,
        severity: Severity,
        event: Event,
        conditions: &ConditionSet,
        scanned: usize,
        matched: usize,
    ) {
        // Skip formatting entirely when the event would be dropped
        if !Logger::enabled(self.config.log_level, severity) {
            return;
        }
        let conditions = conditions.to_string();
        let scanned = scanned.to_string();
        let matched = matched.to_string();
        Logger::log(
            severity,
            event,
            &[
                ("conditions", conditions.as_str()),
                ("matched", matched.as_str()),
                ("scanned", scanned.as_str()),
            ],
        );
    }
}

impl FromIterator<Record> for QueryEngine {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        QueryEngine::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QueryEngine {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an engine's records
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Arc<Record>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Arc::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Arc::as_ref)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl PartialEq for QueryEngine {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl PartialEq<[Record]> for QueryEngine {
    fn eq(&self, other: &[Record]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl PartialEq<Vec<Record>> for QueryEngine {
    fn eq(&self, other: &Vec<Record>) -> bool {
        self == other.as_slice()
    }
}

impl fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

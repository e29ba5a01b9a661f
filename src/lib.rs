//! docquery - A strict, deterministic in-memory query engine
//!
//! Finds and filters semi-structured records (JSON objects) by condition
//! sets: equality, membership, nested sets, and caller predicates.
//!
//! ```
//! use docquery::{ConditionSet, QueryEngine};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"id": 1, "addr": {"country": "Japan"}}),
//!     json!({"id": 2, "addr": {"country": "US"}}),
//! ];
//! let engine: QueryEngine = records
//!     .into_iter()
//!     .filter_map(|v| v.as_object().cloned())
//!     .collect();
//!
//! let japan = ConditionSet::try_from(json!({"addr": {"country": "Japan"}})).unwrap();
//! let in_japan = engine.filter(&japan);
//! assert!(in_japan.find_first(&ConditionSet::new().eq("id", 1)).is_some());
//! assert!(in_japan.find_first(&ConditionSet::new().eq("id", 2)).is_none());
//! ```

pub mod condition;
pub mod engine;
pub mod lookup;
pub mod observability;

pub use condition::{Condition, ConditionError, ConditionEvaluator, ConditionSet, Predicate, Record};
pub use engine::{EngineConfig, QueryEngine, QueryError, QueryResult};
pub use lookup::{FieldLookup, LookupError};

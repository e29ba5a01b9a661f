//! Condition subsystem for docquery
//!
//! A condition set maps field names to condition values and is evaluated
//! against one record at a time.
//!
//! # Condition kinds
//!
//! - Equality: record value equals the literal (explicit null included)
//! - Membership: record value is one of a sequence of literals
//! - Nested: record value is a mapping matching a nested condition set
//! - Predicate: a caller closure decides, given the raw field lookup
//!
//! # Invariants
//!
//! - Evaluation is pure: neither the record nor the set is mutated
//! - Absent fields fail every non-predicate condition
//! - Present-but-null fields are values like any other

mod ast;
mod errors;
mod evaluator;

pub use ast::{Condition, ConditionSet, Predicate, Record};
pub use errors::ConditionError;
pub use evaluator::ConditionEvaluator;

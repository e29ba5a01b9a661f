//! Query engine subsystem for docquery
//!
//! Layered on the condition evaluator, the engine answers three questions
//! over an ordered record collection:
//!
//! 1. Which record is the first to match? (`find_first`)
//! 2. Same, but a miss is an error (`find_first_or_fail`)
//! 3. Which records match? (`filter`, returning a new engine)
//!
//! # Invariants
//!
//! - Order is preserved; filtering only removes records
//! - The receiver is never mutated
//! - `filter(a).filter(b)` equals `filter(a.merge(b))` for disjoint fields

mod config;
mod engine;
mod errors;

pub use config::EngineConfig;
pub use engine::{Iter, QueryEngine};
pub use errors::{ConfigError, QueryError, QueryErrorCode, QueryResult};

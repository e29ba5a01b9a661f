//! Observability subsystem for docquery
//!
//! Structured, synchronous JSON logging of query activity.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use docquery::observability::{Event, Logger, Severity};
//!
//! Logger::log(Severity::Info, Event::QueryFilter, &[("matched", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

//! Generic field-mapping and transformation engine
//!
//! Declarative rule tables describe how to pull values (possibly nested,
//! possibly composed from several source fields) out of heterogeneous source
//! records, format them, and write them into flat target records. The engine
//! is pure and stateless given its inputs; the orchestrator in
//! [`crate::core::import`] drives it.

pub mod engine;
pub mod rule;

pub use engine::{apply_schema, clean_value, format_value, resolve_field, resolve_raw};
pub use rule::{MappingRule, MappingSchema, ValueFormat, DEFAULT_GLUE, MULTI_PATH_SEPARATOR};

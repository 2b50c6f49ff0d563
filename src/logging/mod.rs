//! Logging infrastructure
//!
//! Structured console logging via `tracing`, with optional rotated JSON file
//! output.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

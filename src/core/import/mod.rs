//! Import orchestration
//!
//! This module provides the core import logic: the default mapping schema
//! tables, per-order result tracking, batch summaries, and the orchestrator
//! that ties the source platform and order store together.

pub mod orchestrator;
pub mod result;
pub mod schemas;
pub mod summary;

pub use orchestrator::ImportOrchestrator;
pub use result::{ErrorScope, HeaderOutcome, ImportErrorEntry, ImportResult, LineOutcome};
pub use schemas::ImportSchemas;
pub use summary::ImportSummary;

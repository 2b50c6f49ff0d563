//! Core business logic

pub mod import;

pub use import::{ImportOrchestrator, ImportSummary};

//! Source platform adapters
//!
//! The `SourcePlatform` trait is the fetch boundary the orchestrator consumes;
//! `RestPlatform` is the production implementation.

pub mod client;
pub mod rest;

pub use client::SourcePlatform;
pub use rest::RestPlatform;

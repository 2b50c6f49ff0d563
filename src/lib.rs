// Orderlift - E-Commerce Order Import Tool
// Copyright (c) 2025 Orderlift Contributors
// Licensed under the MIT License

//! # Orderlift - E-Commerce Order Import
//!
//! Orderlift is an order import tool built in Rust that pulls orders from an
//! e-commerce platform's REST API, maps them onto flat ERP-style order
//! records through declarative field schemas, and writes them into an order
//! store.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** orders, shipping addresses, and line items via REST
//! - **Mapping** nested platform records onto flat target records with
//!   declarative per-field rules (paths, glue, dates, currency, defaults)
//! - **Correcting** mapped values through lookup tables (region
//!   abbreviations, payment type codes)
//! - **Persisting** order headers and lines with create-or-update semantics
//!   and per-order failure isolation
//!
//! ## Architecture
//!
//! Orderlift follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (import orchestration, schemas, summaries)
//! - [`mapping`] - Declarative field-mapping engine
//! - [`lookup`] - Post-mapping correction tables
//! - [`adapters`] - External integrations (source platform, order store)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//!
//! use orderlift::adapters::platform::RestPlatform;
//! use orderlift::adapters::store::create_store;
//! use orderlift::config::load_config;
//! use orderlift::core::import::ImportOrchestrator;
//! use orderlift::domain::SessionId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("orderlift.toml")?;
//!
//!     let platform = Arc::new(RestPlatform::connect(&config.platform).await?);
//!     let store = create_store(&config)?;
//!     let session = SessionId::new(config.import.session_id.clone())?;
//!
//!     let orchestrator = ImportOrchestrator::new(platform, store, session);
//!     let summary = orchestrator
//!         .import_batch(config.import.limit, &BTreeMap::new())
//!         .await?;
//!
//!     println!("Imported {} orders", summary.total_orders);
//!     Ok(())
//! }
//! ```
//!
//! ## Field Mapping
//!
//! Each target field is described by a [`mapping::MappingRule`]: where to
//! read from, how to join multiple source paths, and how to format the
//! result.
//!
//! ```rust
//! use orderlift::domain::TargetRecord;
//! use orderlift::mapping::{apply_schema, MappingRule, MappingSchema};
//! use serde_json::json;
//!
//! let schema = MappingSchema::new("header")
//!     .rule("orderno", MappingRule::path("id"))
//!     .rule("orderdate", MappingRule::path("date_created").date("%Y%m%d"))
//!     .rule(
//!         "contact",
//!         MappingRule::path("billing_address.first_name|billing_address.last_name").glue(" "),
//!     );
//!
//! let order = json!({
//!     "id": 4100,
//!     "date_created": "2023-01-05T00:00:00Z",
//!     "billing_address": { "first_name": "Jane", "last_name": "Doe" }
//! });
//!
//! let mut record = TargetRecord::new();
//! apply_schema(&order, &schema, &mut record);
//! assert_eq!(record.get("orderno"), Some("4100"));
//! assert_eq!(record.get("orderdate"), Some("20230105"));
//! assert_eq!(record.get("contact"), Some("Jane Doe"));
//! ```
//!
//! ## Error Handling
//!
//! Orderlift uses the [`domain::ImportError`] type for all errors:
//!
//! ```rust,no_run
//! use orderlift::domain::ImportError;
//!
//! fn example() -> Result<(), ImportError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = orderlift::config::load_config("orderlift.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Orderlift uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting import");
//! warn!(order_id = "4100", "Order has no shipping address");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod lookup;
pub mod mapping;

//! Configuration management for orderlift.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Orderlift uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orderlift::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("orderlift.toml")?;
//!
//! // Access configuration sections
//! println!("Platform URL: {}", config.platform.base_url);
//! if let Some(store) = &config.store {
//!     println!("Store URL: {}", store.base_url);
//! }
//! println!("Session: {}", config.import.session_id);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level, dry run)
//! - [`PlatformConfig`] - Source platform connection and credentials
//! - [`ImportConfig`] - Import settings (limit, session id, filters)
//! - [`StoreConfig`] - REST order store connection
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [platform]
//! base_url = "https://api.bigcommerce.com"
//! store_hash = "abc123"
//! client_id = "your-client-id"
//! auth_token = "${ORDERLIFT_PLATFORM_AUTH_TOKEN}"
//!
//! [import]
//! session_id = "web"
//! limit = 250
//!
//! [store]
//! base_url = "http://localhost:8080"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export ORDERLIFT_PLATFORM_AUTH_TOKEN="secret-token"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ImportConfig, LoggingConfig, OrderliftConfig, PlatformConfig, StoreConfig,
    StoreTarget,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};

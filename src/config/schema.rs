//! Configuration schema types
//!
//! This module defines the configuration structure mapped from the TOML
//! config file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::SecretString;

/// Order store target selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreTarget {
    /// REST order store
    #[default]
    Rest,
    /// In-memory store (dry runs and tests)
    Memory,
}

/// Main orderlift configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderliftConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source platform configuration
    pub platform: PlatformConfig,

    /// Import settings
    #[serde(default)]
    pub import: ImportConfig,

    /// Store target (rest or memory)
    #[serde(default)]
    pub store_target: StoreTarget,

    /// REST store configuration (required if store_target = rest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,

    /// Payment method label -> store payment code overrides
    ///
    /// The reserved key "default" replaces the fallback code.
    #[serde(default)]
    pub payment_types: BTreeMap<String, String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OrderliftConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.platform.validate()?;
        self.import.validate()?;

        // Both store configurations can be present in the TOML file; only
        // the active one is validated
        if self.store_target == StoreTarget::Rest {
            if let Some(ref config) = self.store {
                config.validate()?;
            } else {
                return Err(
                    "store configuration is required when store_target = 'rest'".to_string()
                );
            }
        }

        self.logging.validate()?;
        Ok(())
    }
}

impl Default for OrderliftConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            platform: PlatformConfig::default(),
            import: ImportConfig::default(),
            store_target: StoreTarget::default(),
            store: Some(StoreConfig::default()),
            payment_types: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (map orders but persist to an in-memory store)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Source platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform API
    pub base_url: String,

    /// Store hash identifying the shop
    pub store_hash: String,

    /// API client id sent with every request
    pub client_id: String,

    /// API auth token
    /// Stored securely in memory and automatically zeroized on drop
    pub auth_token: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: Disabling TLS verification (setting to `false`)
    /// exposes the application to man-in-the-middle attacks and should ONLY
    /// be used in development/testing environments.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl PlatformConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("platform.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("platform.base_url must start with http:// or https://".to_string());
        }

        if self.store_hash.is_empty() {
            return Err("platform.store_hash cannot be empty".to_string());
        }

        if self.client_id.is_empty() {
            return Err("platform.client_id cannot be empty".to_string());
        }

        if self.auth_token.expose_secret().is_empty() {
            return Err("platform.auth_token cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("platform.timeout_secs must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.bigcommerce.com".to_string(),
            store_hash: String::new(),
            client_id: String::new(),
            auth_token: crate::config::secret_string(String::new()),
            timeout_secs: default_timeout_secs(),
            tls_verify: true,
        }
    }
}

/// Import settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Maximum orders per batch (0 = no limit)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Import session identifier stamped onto every header
    #[serde(default = "default_session_id")]
    pub session_id: String,

    /// Query filters forwarded to the platform order listing
    /// (e.g. status_id = "11", min_date_created = "2023-01-01")
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl ImportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.session_id.trim().is_empty() {
            return Err("import.session_id cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            session_id: default_session_id(),
            filters: BTreeMap::new(),
        }
    }
}

/// REST order store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the order store API
    pub base_url: String,

    /// Optional bearer token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("store.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("store.base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("store.timeout_secs must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for rotated log files
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// Log rotation strategy (daily or never)
    #[serde(default = "default_file_rotation")]
    pub file_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "never"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.file_rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_file_path(),
            file_rotation: default_file_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_limit() -> usize {
    250
}

fn default_session_id() -> String {
    "web".to_string()
}

fn default_file_path() -> String {
    "logs".to_string()
}

fn default_file_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn valid_config() -> OrderliftConfig {
        OrderliftConfig {
            platform: PlatformConfig {
                base_url: "https://api.example.com".to_string(),
                store_hash: "abc123".to_string(),
                client_id: "client".to_string(),
                auth_token: secret_string("token".to_string()),
                timeout_secs: 30,
                tls_verify: true,
            },
            ..OrderliftConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_default_config_rejects_empty_credentials() {
        let config = OrderliftConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("log_level"));
    }

    #[test]
    fn test_platform_base_url_must_be_http() {
        let mut config = valid_config();
        config.platform.base_url = "ftp://api.example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("platform.base_url"));
    }

    #[test]
    fn test_rest_target_requires_store_section() {
        let mut config = valid_config();
        config.store_target = StoreTarget::Rest;
        config.store = None;
        let err = config.validate().unwrap_err();
        assert!(err.contains("store configuration"));
    }

    #[test]
    fn test_memory_target_skips_store_section() {
        let mut config = valid_config();
        config.store_target = StoreTarget::Memory;
        config.store = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_session_id_rejected() {
        let mut config = valid_config();
        config.import.session_id = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("session_id"));
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = valid_config();
        config.logging.file_rotation = "hourly".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("file_rotation"));
    }

    #[test]
    fn test_store_target_serde_lowercase() {
        let toml_str = r#"
            store_target = "memory"

            [platform]
            base_url = "https://api.example.com"
            store_hash = "abc"
            client_id = "client"
            auth_token = "token"
        "#;
        let config: OrderliftConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store_target, StoreTarget::Memory);
    }
}

//! Configuration loader with TOML parsing and environment variable overrides

use regex::Regex;
use std::fs;
use std::path::Path;

use super::schema::{OrderliftConfig, StoreTarget};
use crate::config::secret_string;
use crate::domain::errors::ImportError;
use crate::domain::result::Result;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into OrderliftConfig
/// 4. Applies environment variable overrides (ORDERLIFT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use orderlift::config::loader::load_config;
///
/// let config = load_config("orderlift.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OrderliftConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ImportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ImportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: OrderliftConfig = toml::from_str(&contents)
        .map_err(|e| ImportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ImportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Referencing an unset variable is an
/// error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ImportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ImportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ORDERLIFT_* prefix
///
/// Environment variables follow the pattern: ORDERLIFT_<SECTION>_<KEY>
/// For example: ORDERLIFT_PLATFORM_BASE_URL, ORDERLIFT_IMPORT_LIMIT
fn apply_env_overrides(config: &mut OrderliftConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("ORDERLIFT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("ORDERLIFT_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Platform overrides
    if let Ok(val) = std::env::var("ORDERLIFT_PLATFORM_BASE_URL") {
        config.platform.base_url = val;
    }
    if let Ok(val) = std::env::var("ORDERLIFT_PLATFORM_STORE_HASH") {
        config.platform.store_hash = val;
    }
    if let Ok(val) = std::env::var("ORDERLIFT_PLATFORM_CLIENT_ID") {
        config.platform.client_id = val;
    }
    if let Ok(val) = std::env::var("ORDERLIFT_PLATFORM_AUTH_TOKEN") {
        config.platform.auth_token = secret_string(val);
    }
    if let Ok(val) = std::env::var("ORDERLIFT_PLATFORM_TLS_VERIFY") {
        config.platform.tls_verify = val.parse().unwrap_or(true);
    }

    // Import overrides
    if let Ok(val) = std::env::var("ORDERLIFT_IMPORT_LIMIT") {
        if let Ok(limit) = val.parse() {
            config.import.limit = limit;
        }
    }
    if let Ok(val) = std::env::var("ORDERLIFT_IMPORT_SESSION_ID") {
        config.import.session_id = val;
    }

    // Store overrides
    if let Ok(val) = std::env::var("ORDERLIFT_STORE_TARGET") {
        match val.as_str() {
            "rest" => config.store_target = StoreTarget::Rest,
            "memory" => config.store_target = StoreTarget::Memory,
            other => {
                tracing::warn!(value = other, "Ignoring unknown ORDERLIFT_STORE_TARGET");
            }
        }
    }
    if let Some(ref mut store_config) = config.store {
        if let Ok(val) = std::env::var("ORDERLIFT_STORE_BASE_URL") {
            store_config.base_url = val;
        }
        if let Ok(val) = std::env::var("ORDERLIFT_STORE_API_KEY") {
            store_config.api_key = Some(secret_string(val));
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ORDERLIFT_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ORDERLIFT_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }
}

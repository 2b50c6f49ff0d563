//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the orderlift configuration file.

use clap::Args;

use crate::config::load_config;
use crate::config::schema::StoreTarget;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load means a
        // valid configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Platform: {}", config.platform.base_url);
        println!("  Store Hash: {}", config.platform.store_hash);

        match config.store_target {
            StoreTarget::Rest => {
                if let Some(ref store_config) = config.store {
                    println!("  Store Target: REST");
                    println!("  Store URL: {}", store_config.base_url);
                }
            }
            StoreTarget::Memory => {
                println!("  Store Target: Memory");
            }
        }

        println!("  Session: {}", config.import.session_id);
        println!(
            "  Limit: {}",
            if config.import.limit == 0 {
                "unlimited".to_string()
            } else {
                config.import.limit.to_string()
            }
        );
        if !config.import.filters.is_empty() {
            println!("  Filters: {:?}", config.import.filters);
        }
        if !config.payment_types.is_empty() {
            println!("  Payment Type Overrides: {}", config.payment_types.len());
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs {};
        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let toml_content = r#"
[platform]
base_url = "https://api.example.com"
store_hash = "abc123"
client_id = "client"
auth_token = "token"

[store]
base_url = "http://localhost:8080"
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(&temp_file.path().to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }
}

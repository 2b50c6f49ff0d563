//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "orderlift.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Orderlift configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set ORDERLIFT_PLATFORM_AUTH_TOKEN");
                println!("  3. Validate configuration: orderlift validate-config");
                println!("  4. Run import: orderlift import");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Orderlift Configuration File
# E-Commerce Order Import Tool

# Order store target (rest or memory)
store_target = "rest"

[application]
log_level = "info"
dry_run = false

[platform]
base_url = "https://api.bigcommerce.com"
store_hash = "your-store-hash"
client_id = "your-client-id"
auth_token = "${ORDERLIFT_PLATFORM_AUTH_TOKEN}"
timeout_secs = 30
tls_verify = true

[import]
# Maximum orders per batch (0 = no limit)
limit = 250
# Session identifier stamped onto every imported header
session_id = "web"

# Query filters forwarded to the platform order listing
[import.filters]
# status_id = "11"
# min_date_created = "2023-01-01"

[store]
base_url = "http://localhost:8080"
timeout_secs = 30

# Payment method label -> payment code overrides
# The reserved key "default" replaces the fallback code.
[payment_types]
# "Purchase Order" = "PO"
# default = "OT"

[logging]
file_enabled = false
file_path = "logs"
file_rotation = "daily"
"#
        .to_string()
    }
}

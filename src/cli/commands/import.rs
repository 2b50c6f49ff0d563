//! Import command implementation
//!
//! This module implements the `import` command for pulling orders from the
//! source platform and writing them into the order store.

use std::sync::Arc;

use clap::Args;

use crate::adapters::platform::RestPlatform;
use crate::adapters::store::create_store;
use crate::config::load_config;
use crate::core::import::ImportOrchestrator;
use crate::domain::SessionId;
use crate::lookup::PaymentTypeTable;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - map orders without writing to the order store
    #[arg(long)]
    pub dry_run: bool,

    /// Override maximum orders per batch (0 = no limit)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Override the import session identifier
    #[arg(long)]
    pub session: Option<String>,

    /// Additional order listing filter, key=value (repeatable)
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting import command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(limit) = self.limit {
            tracing::info!(limit, "Overriding batch limit from CLI");
            config.import.limit = limit;
        }

        if let Some(session) = &self.session {
            tracing::info!(session = %session, "Overriding session id from CLI");
            config.import.session_id = session.clone();
        }

        for filter in &self.filters {
            match filter.split_once('=') {
                Some((key, value)) => {
                    config
                        .import
                        .filters
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
                None => {
                    eprintln!("Invalid filter '{filter}'. Expected KEY=VALUE");
                    return Ok(2);
                }
            }
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let session = match SessionId::new(config.import.session_id.clone()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Invalid session id: {e}");
                return Ok(2);
            }
        };

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no data will be written");
            println!("🔍 DRY RUN MODE - No data will be written to the order store");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.application.dry_run {
            println!("Import Configuration:");
            println!("  Platform: {}", config.platform.base_url);
            println!("  Session: {}", session);
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
            println!();
            print!("Proceed with import? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Import cancelled.");
                return Ok(0);
            }
        }

        // Connect to the source platform
        tracing::info!(base_url = %config.platform.base_url, "Connecting to source platform");
        let platform = match RestPlatform::connect(&config.platform).await {
            Ok(p) => Arc::new(p),
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to source platform");
                eprintln!("Failed to connect to source platform: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Create the order store
        let store = match create_store(&config) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create order store");
                eprintln!("Failed to create order store: {e}");
                return Ok(4);
            }
        };

        let orchestrator = ImportOrchestrator::new(platform, store, session)
            .with_payment_types(PaymentTypeTable::from_map(&config.payment_types));

        tracing::info!("Executing import");
        println!("🚀 Starting import...");
        println!();

        let summary = match orchestrator
            .import_batch(config.import.limit, &config.import.filters)
            .await
        {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Import failed");
                eprintln!("Import failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        println!();
        println!("📊 Import Summary:");
        println!("  Total Orders: {}", summary.total_orders);
        println!("  Headers Created: {}", summary.headers_created);
        println!("  Headers Updated: {}", summary.headers_updated);
        println!("  Headers Failed: {}", summary.headers_failed);
        println!("  Lines Saved: {}", summary.lines_saved);
        println!("  Lines Failed: {}", summary.lines_failed);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        let failed_orders = summary.failed_orders();
        if failed_orders > 0 {
            println!("⚠️  Errors encountered:");
            for result in summary.results.values() {
                for entry in &result.errors {
                    println!(
                        "  - order {} ({:?}): {}",
                        result.order_id, entry.scope, entry.message
                    );
                }
            }
            println!();
        }

        let exit_code = if summary.is_successful() {
            println!("✅ Import completed successfully!");
            0
        } else {
            println!("⚠️  Import completed with failures");
            1 // Partial success
        };

        Ok(exit_code)
    }
}

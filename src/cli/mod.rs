//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for orderlift using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Orderlift - E-Commerce Order Import Tool
#[derive(Parser, Debug)]
#[command(name = "orderlift")]
#[command(version, about, long_about = None)]
#[command(author = "Orderlift Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "orderlift.toml", env = "ORDERLIFT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ORDERLIFT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import orders from the source platform into the order store
    Import(commands::import::ImportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

//! Defines the command-line arguments of the reference data service.
//!
//! This module uses `clap` to parse the service name, directory paths and log
//! level. Every binary built on this crate accepts the same arguments.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Holds the standard configuration parameters parsed from the command line.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct CommonArgs {
    /// Name of the service (used for logging)
    #[arg(short, long, default_value = "refdata")]
    service_name: String,

    /// Path to the configuration directory
    #[arg(long, default_value = "./config")]
    config_dir: PathBuf,

    /// Path to the data directory (holds the catalog snapshots)
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl CommonArgs {
    /// Parses command-line arguments into a `CommonArgs` struct.
    ///
    /// This function automatically handles `--help` and `--version` flags via `clap`.
    /// If arguments are invalid, it will print an error and exit.
    pub fn parse_args(args: Vec<String>) -> Self {
        CommonArgs::parse_from(args)
    }

    /// Returns the path to the configuration directory.
    ///
    /// This directory may contain `loader.json`.
    pub fn get_config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Returns the path to the data directory.
    pub fn get_data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    pub fn get_service_name(&self) -> String {
        self.service_name.clone()
    }

    pub fn get_log_level(&self) -> String {
        self.log_level.clone()
    }
}

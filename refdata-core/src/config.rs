//! Loader configuration.
//!
//! Read from `loader.json` in the config directory. Every field is optional;
//! a missing file means the defaults.

use crate::fs::{load_state, PathManager};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

const LOADER_CONFIG_FILE_NAME: &str = "loader.json";

/// Names of the snapshot files, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub bonds_file: String,
    pub swaps_file: String,
    pub futures_file: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            bonds_file: "bonds.json".to_string(),
            swaps_file: "swaps.json".to_string(),
            futures_file: "futures.json".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Loads the configuration from the standard location, falling back to defaults.
    pub fn load(path_manager: &PathManager) -> Result<Self> {
        let file_path = path_manager.get_config_file_path(LOADER_CONFIG_FILE_NAME);

        if !file_path.exists() {
            info!("No {:?}, using default loader configuration", file_path);
            return Ok(Self::default());
        }

        load_state(&file_path)
            .with_context(|| format!("Failed to load loader configuration from {:?}", file_path))
    }
}

//! Configuration for the application

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
}

/// Backing document locations for both record stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted documents; created on first load
    pub data_dir: PathBuf,
    /// Time log document file name
    pub log_file: String,
    /// Inventory document file name
    pub inventory_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_file: "time_logs.csv".to_string(),
            inventory_file: "inventory.csv".to_string(),
        }
    }
}

impl StorageConfig {
    /// Full path of the time log document.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(&self.log_file)
    }

    /// Full path of the inventory document.
    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }
}

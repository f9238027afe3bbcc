//! Application context
//!
//! Explicit dependency wiring: configuration resolves the document paths,
//! the CSV repositories implement the core ports, and both record stores
//! load their collections up front.

use std::sync::Arc;

use mindstock_core::{InventoryService, TimeLogService};
use mindstock_domain::{Config, Result};
use tracing::info;

use crate::storage::{CsvInventoryRepository, CsvTimeLogRepository};

/// Fully wired application state
pub struct AppContext {
    pub config: Config,
    pub time_logs: TimeLogService,
    pub inventory: InventoryService,
}

impl AppContext {
    /// Wire both stores against the configured document paths
    pub fn init(config: Config) -> Result<Self> {
        let time_log_repo = Arc::new(CsvTimeLogRepository::new(config.storage.log_path()));
        let inventory_repo = Arc::new(CsvInventoryRepository::new(config.storage.inventory_path()));

        let time_logs = TimeLogService::new(time_log_repo)?;
        let inventory = InventoryService::new(inventory_repo)?;

        info!(data_dir = %config.storage.data_dir.display(), "application context initialized");
        Ok(Self { config, time_logs, inventory })
    }
}

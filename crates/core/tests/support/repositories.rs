//! In-memory mock repositories
//!
//! Each mock seeds the initial load and captures every save so tests can
//! assert on the exact collection handed to persistence.

use std::sync::Mutex;

use mindstock_core::{InventoryRepository, TimeLogRepository};
use mindstock_domain::{InventoryItem, Result, TimeLogRecord};

#[derive(Default)]
pub struct MockTimeLogRepository {
    pub seed: Vec<TimeLogRecord>,
    pub saves: Mutex<Vec<Vec<TimeLogRecord>>>,
}

impl MockTimeLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<TimeLogRecord>) -> Self {
        Self { seed, saves: Mutex::new(Vec::new()) }
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_save(&self) -> Option<Vec<TimeLogRecord>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl TimeLogRepository for MockTimeLogRepository {
    fn load(&self) -> Result<Vec<TimeLogRecord>> {
        Ok(self.seed.clone())
    }

    fn save(&self, records: &[TimeLogRecord]) -> Result<()> {
        self.saves.lock().unwrap().push(records.to_vec());
        Ok(())
    }

    fn export(&self, records: &[TimeLogRecord]) -> Result<String> {
        let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        Ok(ids.join(","))
    }
}

#[derive(Default)]
pub struct MockInventoryRepository {
    pub seed: Vec<InventoryItem>,
    pub saves: Mutex<Vec<Vec<InventoryItem>>>,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<InventoryItem>) -> Self {
        Self { seed, saves: Mutex::new(Vec::new()) }
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_save(&self) -> Option<Vec<InventoryItem>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl InventoryRepository for MockInventoryRepository {
    fn load(&self) -> Result<Vec<InventoryItem>> {
        Ok(self.seed.clone())
    }

    fn save(&self, items: &[InventoryItem]) -> Result<()> {
        self.saves.lock().unwrap().push(items.to_vec());
        Ok(())
    }
}

//! Port interfaces for time log persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use mindstock_domain::{Result, TimeLogRecord};

/// Trait for persisting the time log collection
///
/// The store is small enough that every mutation rewrites the whole
/// document; the port therefore exposes whole-collection operations only.
pub trait TimeLogRepository: Send + Sync {
    /// Load every stored record, creating an empty backing document if none exists
    fn load(&self) -> Result<Vec<TimeLogRecord>>;

    /// Replace the backing document with the given records
    fn save(&self, records: &[TimeLogRecord]) -> Result<()>;

    /// Render the records as a CSV document matching the persisted schema
    fn export(&self, records: &[TimeLogRecord]) -> Result<String>;
}

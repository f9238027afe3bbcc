//! # Mindstock Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Record store services for time logs and inventory
//! - Port/adapter interfaces (traits)
//! - Aggregation functions over stored records
//!
//! ## Architecture Principles
//! - Only depends on `mindstock-domain`
//! - No filesystem or CSV code
//! - All persistence via traits
//! - Pure, testable business logic

pub mod analytics;
pub mod inventory;
pub mod timelog;

// Re-export specific items to avoid ambiguity
pub use inventory::ports::InventoryRepository;
pub use inventory::{InventoryService, InventorySort};
pub use timelog::ports::TimeLogRepository;
pub use timelog::{LogOutcome, TimeLogService, Timer};

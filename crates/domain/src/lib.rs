//! # Mindstock Domain
//!
//! Business domain types and models for Mindstock.
//!
//! This crate contains:
//! - Domain data types (TimeLogRecord, InventoryItem, report rows)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Mindstock crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{Config, StorageConfig};
pub use errors::{MindstockError, Result};
pub use types::{
    AgingItem, CashFlowPoint, InventoryField, InventoryItem, InventorySummary, ItemPerformance,
    ItemStatus, LogSummary, MoodTimePoint, NewItem, NewSession, Period, SeriesRevenue, SeriesRoi,
    TimeBlock, TimeLogRecord, WeekdayTotal,
};

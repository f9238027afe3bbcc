//! Domain types and models

pub mod inventory;
pub mod reports;
pub mod timelog;

// Re-export record types for convenience
pub use inventory::{InventoryField, InventoryItem, ItemStatus, NewItem};
pub use reports::{
    AgingItem, CashFlowPoint, InventorySummary, ItemPerformance, LogSummary, MoodTimePoint,
    SeriesRevenue, SeriesRoi, WeekdayTotal,
};
pub use timelog::{NewSession, Period, TimeBlock, TimeLogRecord};

//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Weekday aggregation output labels, fixed Monday-first order
pub const WEEKDAY_LABELS: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

// Inventory analytics
pub const LOW_LIQUIDITY_THRESHOLD_DAYS: i64 = 365;
pub const PERFORMER_LIMIT: usize = 10;

// Persisted document formats (whole-second round-trip)
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

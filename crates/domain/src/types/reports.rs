//! Aggregation output rows
//!
//! This module centralizes the summary tables produced by the aggregators.
//! The rows are plain data handed to a report/chart layer; no rendering
//! concerns live here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Time log reports */
/* -------------------------------------------------------------------------- */

/// Summary metrics over a filtered, non-empty set of log records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    /// Total logged duration in seconds
    pub total_seconds: i64,

    /// Average duration per distinct day present in the filtered set
    /// (not per calendar day of the range)
    pub avg_seconds_per_day: f64,

    /// Number of stored records in the filtered set
    pub session_count: usize,

    /// Most frequent category; ties broken by first encounter
    pub top_category: String,

    /// Most frequent mood; ties broken by first encounter
    pub top_mood: String,
}

/// Duration total for one weekday; all seven rows are always emitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayTotal {
    pub weekday: String,
    pub total_seconds: i64,
}

/// One point of the time-of-day/mood scatter
///
/// Grouped by exact fractional start hour, activity, and mood; each
/// distinct key is its own point, there is no binning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTimePoint {
    pub hour_float: f64,
    pub activity: String,
    pub mood: String,
    pub duration_hours: f64,
}

/* -------------------------------------------------------------------------- */
/* Inventory reports */
/* -------------------------------------------------------------------------- */

/// Headline inventory metrics (realized and unrealized)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_sales: f64,
    pub total_expenses: f64,
    pub unrealized_sales: f64,
    pub unrealized_profit: f64,
    pub total_percent_gain: f64,
}

/// ROI aggregation for one series over its sold items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRoi {
    pub series: String,
    pub total_cost: f64,
    pub total_profit: f64,
    pub percent_gain: f64,
}

/// Per-item performance row for the top/worst rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPerformance {
    pub name: String,
    pub series: String,
    pub purchase_price: f64,
    pub resale_price: f64,
    pub percent_gain: f64,
}

/// One signed cash event with its running cumulative sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub date: NaiveDate,
    pub amount: f64,
    pub cumulative: f64,
}

/// Revenue (or exposure) attributed to one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRevenue {
    pub series: String,
    pub amount: f64,
}

/// An available item held past the liquidity threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingItem {
    pub name: String,
    pub series: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub days_in_inventory: i64,
}

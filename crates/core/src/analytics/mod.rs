//! Aggregations over stored records
//!
//! Pure functions over already-filtered record slices; filtering by date
//! range or status is the caller's job via the record stores.

pub mod inventory;
pub mod timelog;

pub use inventory::{
    cash_flow, inventory_summary, low_liquidity, roi_by_series, sales_by_series, top_performers,
    unsold_exposure_by_series, worst_performers,
};
pub use timelog::{mood_time_points, summarize, weekday_totals};

//! CSV-backed repositories
//!
//! Both stores persist as flat CSV documents with fixed headers; every
//! save rewrites the whole file.

pub mod inventory_csv;
pub mod timelog_csv;

pub use inventory_csv::{parse_bulk_import, CsvInventoryRepository};
pub use timelog_csv::CsvTimeLogRepository;

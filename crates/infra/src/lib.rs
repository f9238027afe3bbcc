//! # Mindstock Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - CSV-backed repositories for both record stores
//! - Bulk import parsing with schema validation
//! - Configuration loading (environment and file)
//! - Application context wiring
//!
//! ## Architecture
//! - Implements traits defined in `mindstock-core`
//! - Depends on `mindstock-domain` and `mindstock-core`
//! - Contains all "impure" code (filesystem, CSV)

pub mod config;
pub mod context;
pub mod errors;
pub mod storage;

// Re-export commonly used items
pub use context::AppContext;
pub use errors::InfraError;
pub use storage::{parse_bulk_import, CsvInventoryRepository, CsvTimeLogRepository};

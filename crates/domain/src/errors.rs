//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Mindstock
///
/// Every variant is recoverable at the UI boundary; none is fatal to the
/// process.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MindstockError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing columns: {}", missing.join(", "))]
    ImportSchema { missing: Vec<String> },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Mindstock operations
pub type Result<T> = std::result::Result<T, MindstockError>;

//! Inventory record store and persistence ports

pub mod ports;
pub mod service;

pub use service::{InventoryService, InventorySort};

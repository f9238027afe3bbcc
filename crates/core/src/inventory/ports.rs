//! Port interfaces for inventory persistence

use mindstock_domain::{InventoryItem, Result};

/// Trait for persisting the inventory collection
///
/// Whole-collection semantics match the time log port; image blobs are
/// not the repository's concern and are dropped at the boundary.
pub trait InventoryRepository: Send + Sync {
    /// Load every stored item, creating an empty backing document if none exists
    fn load(&self) -> Result<Vec<InventoryItem>>;

    /// Replace the backing document with the given items
    fn save(&self, items: &[InventoryItem]) -> Result<()>;
}

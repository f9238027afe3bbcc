//! Inventory record store - core business logic

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use mindstock_domain::{InventoryField, InventoryItem, ItemStatus, MindstockError, NewItem, Result};
use tracing::info;

use super::ports::InventoryRepository;

/// Presentation orderings mirroring the view-by selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventorySort {
    /// Id ascending (insertion order)
    Id,
    /// Series name, then id
    Series,
    /// Newest purchases first
    PurchaseDateDesc,
    /// Most expensive purchases first
    PurchasePriceDesc,
    /// Available before Sold, then id
    Status,
}

/// Inventory record store
///
/// Same shape as the time log store: in-memory id map, whole-collection
/// save after every mutation.
pub struct InventoryService {
    repository: Arc<dyn InventoryRepository>,
    items: BTreeMap<u32, InventoryItem>,
}

impl InventoryService {
    /// Create the store, loading the existing collection from the repository
    pub fn new(repository: Arc<dyn InventoryRepository>) -> Result<Self> {
        let items = repository
            .load()?
            .into_iter()
            .map(|item| (item.id, item))
            .collect::<BTreeMap<_, _>>();

        Ok(Self { repository, items })
    }

    /// Add one item, assigning the next free id
    pub fn add_item(&mut self, item: NewItem) -> Result<u32> {
        self.add_item_on(item, Local::now().date_naive())
    }

    /// Add one item with an explicit "today" for the selling-date default
    pub fn add_item_on(&mut self, mut item: NewItem, today: NaiveDate) -> Result<u32> {
        Self::validate(&item)?;

        // An item entered as already Sold gets today as its selling date
        if item.status == ItemStatus::Sold && item.selling_date.is_none() {
            item.selling_date = Some(today);
        }

        let id = self.next_id();
        info!(id, name = %item.name, "added inventory item");
        self.items.insert(id, InventoryItem::from_new(id, item));
        self.persist()?;
        Ok(id)
    }

    /// Apply one targeted field update by id
    pub fn update_field(&mut self, id: u32, field: InventoryField) -> Result<()> {
        self.update_field_on(id, field, Local::now().date_naive())
    }

    /// Apply one targeted field update with an explicit "today"
    ///
    /// The Status arm carries the selling-date rule: the first transition
    /// to Sold stamps today, and the stamp is never overwritten by later
    /// status changes. An explicit SellingDate update always wins.
    pub fn update_field_on(&mut self, id: u32, field: InventoryField, today: NaiveDate) -> Result<()> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| MindstockError::NotFound(format!("inventory item {id}")))?;

        match field {
            InventoryField::Name(name) => item.name = name,
            InventoryField::Series(series) => item.series = series,
            InventoryField::PurchaseDate(date) => item.purchase_date = date,
            InventoryField::PurchasePrice(price) => item.purchase_price = price,
            InventoryField::ResalePrice(price) => item.resale_price = price,
            InventoryField::Status(status) => {
                if status == ItemStatus::Sold && item.selling_date.is_none() {
                    item.selling_date = Some(today);
                }
                item.status = status;
            }
            InventoryField::SellingDate(date) => item.selling_date = date,
            InventoryField::Image(image) => item.image = image,
        }

        info!(id, "updated inventory item");
        self.persist()
    }

    /// Remove one item by id
    pub fn remove_item(&mut self, id: u32) -> Result<()> {
        if self.items.remove(&id).is_none() {
            return Err(MindstockError::NotFound(format!("inventory item {id}")));
        }
        info!(id, "removed inventory item");
        self.persist()
    }

    /// Commit a previewed bulk import as one batch with a single save
    pub fn commit_import(&mut self, new_items: Vec<NewItem>) -> Result<usize> {
        for item in &new_items {
            Self::validate(item)?;
        }

        let count = new_items.len();
        for item in new_items {
            let id = self.next_id();
            self.items.insert(id, InventoryItem::from_new(id, item));
        }

        info!(count, "committed bulk import");
        self.persist()?;
        Ok(count)
    }

    /// One item by id
    pub fn item(&self, id: u32) -> Result<&InventoryItem> {
        self.items
            .get(&id)
            .ok_or_else(|| MindstockError::NotFound(format!("inventory item {id}")))
    }

    /// All items in id order
    pub fn items(&self) -> Vec<&InventoryItem> {
        self.items.values().collect()
    }

    /// All items under a presentation ordering
    pub fn sorted_items(&self, sort: InventorySort) -> Vec<&InventoryItem> {
        let mut view: Vec<&InventoryItem> = self.items.values().collect();
        match sort {
            InventorySort::Id => {}
            InventorySort::Series => view.sort_by(|a, b| a.series.cmp(&b.series)),
            InventorySort::PurchaseDateDesc => {
                view.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
            }
            InventorySort::PurchasePriceDesc => {
                view.sort_by(|a, b| {
                    b.purchase_price.partial_cmp(&a.purchase_price).unwrap_or(Ordering::Equal)
                });
            }
            InventorySort::Status => view.sort_by_key(|item| item.status == ItemStatus::Sold),
        }
        view
    }

    fn validate(item: &NewItem) -> Result<()> {
        if item.name.trim().is_empty() {
            return Err(MindstockError::Validation("item name must not be empty".to_string()));
        }
        if item.purchase_price < 0.0 || item.resale_price < 0.0 {
            return Err(MindstockError::Validation("prices must not be negative".to_string()));
        }
        Ok(())
    }

    fn next_id(&self) -> u32 {
        self.items.keys().next_back().map_or(1, |max| max + 1)
    }

    fn persist(&self) -> Result<()> {
        let items: Vec<InventoryItem> = self.items.values().cloned().collect();
        self.repository.save(&items)
    }
}

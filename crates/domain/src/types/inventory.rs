//! Inventory items and targeted field updates

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::MindstockError;

/// Sale status of an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Available,
    Sold,
}

impl ItemStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemStatus {
    type Err = MindstockError;

    /// Parse a status cell, tolerating arbitrary casing ("sold", "SOLD").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("available") {
            Ok(Self::Available)
        } else if trimmed.eq_ignore_ascii_case("sold") {
            Ok(Self::Sold)
        } else {
            Err(MindstockError::Validation(format!("unknown status: {trimmed}")))
        }
    }
}

/// An item about to be added; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub series: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub resale_price: f64,
    pub status: ItemStatus,
    /// Thumbnail bytes; never serialized, blob handling stays outside
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    pub selling_date: Option<NaiveDate>,
}

/// One stored inventory row
///
/// `selling_date` is present iff the item has ever been Sold; the
/// automatic status-change rule sets it once and never overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub series: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub resale_price: f64,
    pub status: ItemStatus,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    pub selling_date: Option<NaiveDate>,
}

impl InventoryItem {
    pub fn from_new(id: u32, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            series: item.series,
            purchase_date: item.purchase_date,
            purchase_price: item.purchase_price,
            resale_price: item.resale_price,
            status: item.status,
            image: item.image,
            selling_date: item.selling_date,
        }
    }

    /// Profit at the recorded resale price.
    pub fn profit(&self) -> f64 {
        self.resale_price - self.purchase_price
    }

    /// Per-item percent gain; undefined when the purchase price is zero.
    pub fn percent_gain(&self) -> Option<f64> {
        if self.purchase_price > 0.0 {
            Some(self.profit() / self.purchase_price * 100.0)
        } else {
            None
        }
    }

    /// Whole days the item has been held as of `today`.
    pub fn days_in_inventory(&self, today: NaiveDate) -> i64 {
        (today - self.purchase_date).num_days()
    }
}

/// Targeted single-field update applied by id
///
/// The Status arm carries the selling-date defaulting rule in the service;
/// every other arm is a direct overwrite.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryField {
    Name(String),
    Series(String),
    PurchaseDate(NaiveDate),
    PurchasePrice(f64),
    ResalePrice(f64),
    Status(ItemStatus),
    SellingDate(Option<NaiveDate>),
    Image(Option<Vec<u8>>),
}

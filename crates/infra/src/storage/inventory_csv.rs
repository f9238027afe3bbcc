//! CSV adapter for the inventory store and the bulk import parser

use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use mindstock_core::InventoryRepository;
use mindstock_domain::constants::DATE_FORMAT;
use mindstock_domain::{InventoryItem, ItemStatus, MindstockError, NewItem, Result};
use tracing::debug;

use crate::errors::InfraError;

/// Persisted column order; image blobs never reach the document
pub const INVENTORY_COLUMNS: [&str; 8] = [
    "id",
    "Item Name",
    "Series",
    "Purchase Date",
    "Purchase Price",
    "Resale Price",
    "Status",
    "Selling Date",
];

/// Columns a bulk import document must carry, in reporting order
pub const IMPORT_COLUMNS: [&str; 6] =
    ["Item Name", "Series", "Purchase Date", "Purchase Price", "Resale Price", "Status"];

/// CSV-file-backed implementation of [`InventoryRepository`]
pub struct CsvInventoryRepository {
    path: PathBuf,
}

impl CsvInventoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn ensure_backing_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(map_io)?;
        }

        debug!(path = %self.path.display(), "creating empty inventory document");
        let mut writer = csv::Writer::from_path(&self.path).map_err(map_csv)?;
        writer.write_record(INVENTORY_COLUMNS).map_err(map_csv)?;
        writer.flush().map_err(map_io)?;
        Ok(())
    }
}

impl InventoryRepository for CsvInventoryRepository {
    fn load(&self) -> Result<Vec<InventoryItem>> {
        self.ensure_backing_file()?;

        let mut reader = csv::Reader::from_path(&self.path).map_err(map_csv)?;
        let mut items = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(map_csv)?;
            items.push(parse_item_row(&row, index + 2)?);
        }

        debug!(count = items.len(), path = %self.path.display(), "loaded inventory document");
        Ok(items)
    }

    fn save(&self, items: &[InventoryItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(map_io)?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(map_csv)?;
        writer.write_record(INVENTORY_COLUMNS).map_err(map_csv)?;
        for item in items {
            writer
                .write_record([
                    item.id.to_string(),
                    item.name.clone(),
                    item.series.clone(),
                    item.purchase_date.format(DATE_FORMAT).to_string(),
                    item.purchase_price.to_string(),
                    item.resale_price.to_string(),
                    item.status.label().to_string(),
                    item.selling_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                ])
                .map_err(map_csv)?;
        }
        writer.flush().map_err(map_io)?;
        Ok(())
    }
}

/// Parse an uploaded bulk import document into previewable items
///
/// The document must carry every column in [`IMPORT_COLUMNS`]; a missing
/// set aborts with `ImportSchema` listing exactly the absent names in
/// reporting order. Sold rows get `today` as their selling date, nothing
/// is persisted here.
pub fn parse_bulk_import<R: Read>(reader: R, today: NaiveDate) -> Result<Vec<NewItem>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().map_err(map_csv)?.clone();

    let position = |name: &str| headers.iter().position(|header| header.trim() == name);
    let missing: Vec<String> = IMPORT_COLUMNS
        .iter()
        .filter(|name| position(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(MindstockError::ImportSchema { missing });
    }

    let columns: Vec<usize> = IMPORT_COLUMNS
        .iter()
        .filter_map(|name| position(name))
        .collect();

    let mut items = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(map_csv)?;
        items.push(parse_import_row(&row, &columns, index + 1, today)?);
    }

    debug!(count = items.len(), "parsed bulk import document");
    Ok(items)
}

fn parse_import_row(
    row: &csv::StringRecord,
    columns: &[usize],
    number: usize,
    today: NaiveDate,
) -> Result<NewItem> {
    let cell = |slot: usize| -> Result<&str> {
        row.get(columns[slot]).map(str::trim).ok_or_else(|| {
            MindstockError::Validation(format!(
                "row {number}: missing {} cell",
                IMPORT_COLUMNS[slot]
            ))
        })
    };
    let bad = |slot: usize, value: &str| {
        MindstockError::Validation(format!(
            "row {number}: invalid {}: {value}",
            IMPORT_COLUMNS[slot]
        ))
    };

    let purchase_date = cell(2)?;
    let purchase_price = cell(3)?;
    let resale_price = cell(4)?;
    let status: ItemStatus = cell(5)?
        .parse()
        .map_err(|_| bad(5, cell(5).unwrap_or_default()))?;

    Ok(NewItem {
        name: cell(0)?.to_string(),
        series: cell(1)?.to_string(),
        purchase_date: NaiveDate::parse_from_str(purchase_date, DATE_FORMAT)
            .map_err(|_| bad(2, purchase_date))?,
        purchase_price: purchase_price.parse().map_err(|_| bad(3, purchase_price))?,
        resale_price: resale_price.parse().map_err(|_| bad(4, resale_price))?,
        status,
        image: None,
        selling_date: (status == ItemStatus::Sold).then_some(today),
    })
}

fn parse_item_row(row: &csv::StringRecord, line: usize) -> Result<InventoryItem> {
    let field = |index: usize| -> Result<&str> {
        row.get(index).ok_or_else(|| {
            MindstockError::Storage(format!(
                "line {line}: missing {} column",
                INVENTORY_COLUMNS[index]
            ))
        })
    };
    let bad = |index: usize, value: &str| {
        MindstockError::Storage(format!(
            "line {line}: invalid {}: {value}",
            INVENTORY_COLUMNS[index]
        ))
    };

    let id = field(0)?;
    let purchase_date = field(3)?;
    let purchase_price = field(4)?;
    let resale_price = field(5)?;
    let selling_date = field(7)?;

    Ok(InventoryItem {
        id: id.parse().map_err(|_| bad(0, id))?,
        name: field(1)?.to_string(),
        series: field(2)?.to_string(),
        purchase_date: NaiveDate::parse_from_str(purchase_date, DATE_FORMAT)
            .map_err(|_| bad(3, purchase_date))?,
        purchase_price: purchase_price.parse().map_err(|_| bad(4, purchase_price))?,
        resale_price: resale_price.parse().map_err(|_| bad(5, resale_price))?,
        status: field(6)?.parse()?,
        image: None,
        selling_date: if selling_date.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(selling_date, DATE_FORMAT)
                    .map_err(|_| bad(7, selling_date))?,
            )
        },
    })
}

fn map_csv(err: csv::Error) -> MindstockError {
    InfraError::from(err).into()
}

fn map_io(err: std::io::Error) -> MindstockError {
    InfraError::from(err).into()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample(id: u32, status: ItemStatus, selling_date: Option<&str>) -> InventoryItem {
        InventoryItem {
            id,
            name: "Chrome Trooper".to_string(),
            series: "Series 9".to_string(),
            purchase_date: date("2024-01-10"),
            purchase_price: 120.5,
            resale_price: 200.0,
            status,
            image: None,
            selling_date: selling_date.map(date),
        }
    }

    #[test]
    fn absent_file_loads_empty_and_creates_a_header_only_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("inventory.csv");
        let repo = CsvInventoryRepository::new(path.clone());

        assert!(repo.load().unwrap().is_empty());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), INVENTORY_COLUMNS.join(","));
    }

    #[test]
    fn round_trip_preserves_items_and_empty_selling_dates() {
        let dir = TempDir::new().unwrap();
        let repo = CsvInventoryRepository::new(dir.path().join("inventory.csv"));

        let items = vec![
            sample(1, ItemStatus::Sold, Some("2024-02-10")),
            sample(2, ItemStatus::Available, None),
        ];
        repo.save(&items).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, items);
        assert_eq!(loaded[1].selling_date, None);
    }

    #[test]
    fn import_reports_exactly_the_missing_columns_in_order() {
        let doc = "Item Name,Purchase Price,Status\nTrooper,100,Sold\n";
        let err = parse_bulk_import(doc.as_bytes(), date("2024-06-01")).unwrap_err();
        assert_eq!(
            err,
            MindstockError::ImportSchema {
                missing: vec![
                    "Series".to_string(),
                    "Purchase Date".to_string(),
                    "Resale Price".to_string(),
                ],
            }
        );
    }

    #[test]
    fn import_stamps_sold_rows_with_today_and_normalizes_status() {
        let doc = "Item Name,Series,Purchase Date,Purchase Price,Resale Price,Status\n\
                   Trooper,Series 9,2024-01-10,100,150,sold\n\
                   Diver,Series 8,2024-02-01,50,80,AVAILABLE\n";

        let items = parse_bulk_import(doc.as_bytes(), date("2024-06-01")).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].status, ItemStatus::Sold);
        assert_eq!(items[0].selling_date, Some(date("2024-06-01")));
        assert_eq!(items[1].status, ItemStatus::Available);
        assert_eq!(items[1].selling_date, None);
    }

    #[test]
    fn import_tolerates_extra_columns_and_shuffled_order() {
        let doc = "Status,Notes,Resale Price,Purchase Price,Purchase Date,Series,Item Name\n\
                   Sold,mint,150,100,2024-01-10,Series 9,Trooper\n";

        let items = parse_bulk_import(doc.as_bytes(), date("2024-06-01")).unwrap();
        assert_eq!(items[0].name, "Trooper");
        assert_eq!(items[0].series, "Series 9");
        assert_eq!(items[0].purchase_price, 100.0);
    }

    #[test]
    fn import_names_the_offending_row_on_a_bad_cell() {
        let doc = "Item Name,Series,Purchase Date,Purchase Price,Resale Price,Status\n\
                   Trooper,Series 9,2024-01-10,100,150,Sold\n\
                   Diver,Series 8,not-a-date,50,80,Available\n";

        let err = parse_bulk_import(doc.as_bytes(), date("2024-06-01")).unwrap_err();
        assert!(matches!(err, MindstockError::Validation(ref msg) if msg.contains("row 2")));
    }
}

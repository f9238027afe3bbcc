//! CSV adapter for the time log store

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use mindstock_core::TimeLogRepository;
use mindstock_domain::constants::{DATE_FORMAT, LOG_TIMESTAMP_FORMAT};
use mindstock_domain::{MindstockError, Result, TimeLogRecord};
use tracing::debug;

use crate::errors::InfraError;

/// Persisted column order; load and export both follow it exactly
pub const LOG_COLUMNS: [&str; 13] = [
    "id",
    "start_time",
    "end_time",
    "duration_seconds",
    "activity",
    "category",
    "mood",
    "start_hour",
    "time_block",
    "period",
    "date",
    "month",
    "year",
];

/// CSV-file-backed implementation of [`TimeLogRepository`]
pub struct CsvTimeLogRepository {
    path: PathBuf,
}

impl CsvTimeLogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create the data directory and a header-only document when absent
    fn ensure_backing_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(map_io)?;
        }

        debug!(path = %self.path.display(), "creating empty time log document");
        let mut writer = csv::Writer::from_path(&self.path).map_err(map_csv)?;
        writer.write_record(LOG_COLUMNS).map_err(map_csv)?;
        writer.flush().map_err(map_io)?;
        Ok(())
    }

    fn render_rows<W: std::io::Write>(records: &[TimeLogRecord], sink: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(LOG_COLUMNS).map_err(map_csv)?;
        for record in records {
            writer
                .write_record([
                    record.id.to_string(),
                    record.start_time.format(LOG_TIMESTAMP_FORMAT).to_string(),
                    record.end_time.format(LOG_TIMESTAMP_FORMAT).to_string(),
                    record.duration_seconds.to_string(),
                    record.activity.clone(),
                    record.category.clone(),
                    record.mood.clone(),
                    record.start_hour.to_string(),
                    record.time_block.label().to_string(),
                    record.period.label().to_string(),
                    record.date.format(DATE_FORMAT).to_string(),
                    record.month.to_string(),
                    record.year.to_string(),
                ])
                .map_err(map_csv)?;
        }
        writer.flush().map_err(map_io)?;
        Ok(())
    }
}

impl TimeLogRepository for CsvTimeLogRepository {
    fn load(&self) -> Result<Vec<TimeLogRecord>> {
        self.ensure_backing_file()?;

        let mut reader = csv::Reader::from_path(&self.path).map_err(map_csv)?;
        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(map_csv)?;
            records.push(parse_row(&row, index + 2)?);
        }

        debug!(count = records.len(), path = %self.path.display(), "loaded time log document");
        Ok(records)
    }

    fn save(&self, records: &[TimeLogRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(map_io)?;
        }
        let file = std::fs::File::create(&self.path).map_err(map_io)?;
        Self::render_rows(records, file)
    }

    fn export(&self, records: &[TimeLogRecord]) -> Result<String> {
        let mut buffer = Vec::new();
        Self::render_rows(records, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|err| MindstockError::Storage(format!("export is not valid utf-8: {err}")))
    }
}

/// Parse one data row; `line` is the 1-based document line for messages
fn parse_row(row: &csv::StringRecord, line: usize) -> Result<TimeLogRecord> {
    let field = |index: usize, name: &str| -> Result<&str> {
        row.get(index)
            .ok_or_else(|| MindstockError::Storage(format!("line {line}: missing {name} column")))
    };
    let bad = |name: &str, value: &str| {
        MindstockError::Storage(format!("line {line}: invalid {name}: {value}"))
    };

    let id = field(0, "id")?;
    let start_time = field(1, "start_time")?;
    let end_time = field(2, "end_time")?;
    let duration = field(3, "duration_seconds")?;
    let start_hour = field(7, "start_hour")?;
    let date = field(10, "date")?;
    let month = field(11, "month")?;
    let year = field(12, "year")?;

    Ok(TimeLogRecord {
        id: id.parse().map_err(|_| bad("id", id))?,
        start_time: NaiveDateTime::parse_from_str(start_time, LOG_TIMESTAMP_FORMAT)
            .map_err(|_| bad("start_time", start_time))?,
        end_time: NaiveDateTime::parse_from_str(end_time, LOG_TIMESTAMP_FORMAT)
            .map_err(|_| bad("end_time", end_time))?,
        duration_seconds: duration.parse().map_err(|_| bad("duration_seconds", duration))?,
        activity: field(4, "activity")?.to_string(),
        category: field(5, "category")?.to_string(),
        mood: field(6, "mood")?.to_string(),
        start_hour: start_hour.parse().map_err(|_| bad("start_hour", start_hour))?,
        time_block: field(8, "time_block")?.parse()?,
        period: field(9, "period")?.parse()?,
        date: NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| bad("date", date))?,
        month: month.parse().map_err(|_| bad("month", month))?,
        year: year.parse().map_err(|_| bad("year", year))?,
    })
}

fn map_csv(err: csv::Error) -> MindstockError {
    InfraError::from(err).into()
}

fn map_io(err: std::io::Error) -> MindstockError {
    InfraError::from(err).into()
}

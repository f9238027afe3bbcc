//! Time log record store - core business logic

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use mindstock_domain::{MindstockError, NewSession, Result, TimeLogRecord};
use tracing::info;

use super::ports::TimeLogRepository;

/// What `log_session` did with the incoming session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    /// A new record was appended under this id
    Created(u32),
    /// An existing same-day record for the activity absorbed the duration
    Merged(u32),
}

impl LogOutcome {
    pub fn id(self) -> u32 {
        match self {
            Self::Created(id) | Self::Merged(id) => id,
        }
    }
}

/// Time log record store
///
/// Keeps the full collection in memory keyed by id and rewrites the
/// backing document through the repository after every mutation.
/// Single-writer; the id map is the source of truth between saves.
pub struct TimeLogService {
    repository: Arc<dyn TimeLogRepository>,
    records: BTreeMap<u32, TimeLogRecord>,
}

impl TimeLogService {
    /// Create the store, loading the existing collection from the repository
    pub fn new(repository: Arc<dyn TimeLogRepository>) -> Result<Self> {
        let records = repository
            .load()?
            .into_iter()
            .map(|record| (record.id, record))
            .collect::<BTreeMap<_, _>>();

        Ok(Self { repository, records })
    }

    /// Log a finished session
    ///
    /// A session on a day that already has a record for the same activity
    /// merges into it by summing `duration_seconds`; the first session's
    /// category and mood win. Otherwise a fully derived record is appended
    /// under the next free id.
    pub fn log_session(&mut self, session: NewSession) -> Result<LogOutcome> {
        self.validate(&session)?;

        let date = session.start_time.date();
        let outcome = match self.find_merge_target(&session.activity, date) {
            Some(id) => {
                let record = self
                    .records
                    .get_mut(&id)
                    .ok_or_else(|| MindstockError::NotFound(format!("log entry {id}")))?;
                record.duration_seconds += session.duration_seconds();
                info!(id, activity = %session.activity, "merged session into existing entry");
                LogOutcome::Merged(id)
            }
            None => {
                let id = self.next_id();
                let record = TimeLogRecord::from_session(id, &session);
                self.records.insert(id, record);
                info!(id, activity = %session.activity, "logged new entry");
                LogOutcome::Created(id)
            }
        };

        self.persist()?;
        Ok(outcome)
    }

    /// Remove a stored entry by id
    pub fn remove_entry(&mut self, id: u32) -> Result<()> {
        if self.records.remove(&id).is_none() {
            return Err(MindstockError::NotFound(format!("log entry {id}")));
        }
        info!(id, "removed log entry");
        self.persist()
    }

    /// Find the record a same-day session for `activity` would merge into
    pub fn find_merge_target(&self, activity: &str, date: NaiveDate) -> Option<u32> {
        self.records
            .values()
            .find(|record| record.activity == activity && record.date == date)
            .map(|record| record.id)
    }

    /// All stored records in id order
    pub fn entries(&self) -> Vec<&TimeLogRecord> {
        self.records.values().collect()
    }

    /// Records whose date falls within `[from, to]`, in id order
    pub fn entries_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&TimeLogRecord> {
        self.records
            .values()
            .filter(|record| record.date >= from && record.date <= to)
            .collect()
    }

    /// Render the collection as a CSV document for download
    pub fn export(&self) -> Result<String> {
        let records: Vec<TimeLogRecord> = self.records.values().cloned().collect();
        self.repository.export(&records)
    }

    fn validate(&self, session: &NewSession) -> Result<()> {
        if session.activity.trim().is_empty() {
            return Err(MindstockError::Validation("activity must not be empty".to_string()));
        }
        if session.end_time < session.start_time {
            return Err(MindstockError::Validation(
                "end time must not precede start time".to_string(),
            ));
        }
        Ok(())
    }

    fn next_id(&self) -> u32 {
        self.records.keys().next_back().map_or(1, |max| max + 1)
    }

    fn persist(&self) -> Result<()> {
        let records: Vec<TimeLogRecord> = self.records.values().cloned().collect();
        self.repository.save(&records)
    }
}

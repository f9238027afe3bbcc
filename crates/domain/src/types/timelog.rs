//! Time log records and their write-time derived fields

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::WEEKDAY_LABELS;
use crate::errors::MindstockError;

/// Coarse part-of-day label derived from the hour a session started
///
/// The hour ranges are fixed: [5,9) Early Morning, [9,12) Late Morning,
/// [12,17) Afternoon, [17,21) Evening, everything else Night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBlock {
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    #[serde(rename = "Late Morning")]
    LateMorning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBlock {
    /// Classify an hour of day (0-23) into its block.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=8 => Self::EarlyMorning,
            9..=11 => Self::LateMorning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::EarlyMorning => "Early Morning",
            Self::LateMorning => "Late Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeBlock {
    type Err = MindstockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Early Morning" => Ok(Self::EarlyMorning),
            "Late Morning" => Ok(Self::LateMorning),
            "Afternoon" => Ok(Self::Afternoon),
            "Evening" => Ok(Self::Evening),
            "Night" => Ok(Self::Night),
            other => Err(MindstockError::Validation(format!("unknown time block: {other}"))),
        }
    }
}

/// Broad AM/PM period derived from the start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    /// Hours before noon are AM, noon onward PM.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = MindstockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Self::Am),
            "PM" => Ok(Self::Pm),
            other => Err(MindstockError::Validation(format!("unknown period: {other}"))),
        }
    }
}

/// One timer session about to be logged; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub activity: String,
    pub category: String,
    pub mood: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl NewSession {
    /// Whole-second duration between start and end.
    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

/// One stored time log row
///
/// The store keeps at most one row per (activity, date) pair; a repeated
/// session on the same day merges by summing `duration_seconds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogRecord {
    pub id: u32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: i64,

    pub activity: String,
    pub category: String,
    pub mood: String,

    pub start_hour: u32,
    pub time_block: TimeBlock,
    pub period: Period,

    pub date: NaiveDate,
    pub month: u32,
    pub year: i32,
}

impl TimeLogRecord {
    /// Build a fully derived record from a validated session.
    pub fn from_session(id: u32, session: &NewSession) -> Self {
        let start = session.start_time;
        let start_hour = start.hour();

        Self {
            id,
            start_time: start,
            end_time: session.end_time,
            duration_seconds: session.duration_seconds(),
            activity: session.activity.clone(),
            category: session.category.clone(),
            mood: session.mood.clone(),
            start_hour,
            time_block: TimeBlock::from_hour(start_hour),
            period: Period::from_hour(start_hour),
            date: start.date(),
            month: start.month(),
            year: start.year(),
        }
    }

    /// Exact fractional hour of day the session started (h + m/60 + s/3600).
    pub fn hour_float(&self) -> f64 {
        f64::from(self.start_time.hour())
            + f64::from(self.start_time.minute()) / 60.0
            + f64::from(self.start_time.second()) / 3600.0
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds as f64 / 3600.0
    }

    /// Weekday label of the session date ("Monday".."Sunday").
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS[self.date.weekday().num_days_from_monday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn time_block_matches_table_at_every_boundary() {
        let expected = [
            (0, TimeBlock::Night),
            (4, TimeBlock::Night),
            (5, TimeBlock::EarlyMorning),
            (8, TimeBlock::EarlyMorning),
            (9, TimeBlock::LateMorning),
            (11, TimeBlock::LateMorning),
            (12, TimeBlock::Afternoon),
            (16, TimeBlock::Afternoon),
            (17, TimeBlock::Evening),
            (20, TimeBlock::Evening),
            (21, TimeBlock::Night),
            (23, TimeBlock::Night),
        ];
        for (hour, block) in expected {
            assert_eq!(TimeBlock::from_hour(hour), block, "hour {hour}");
        }
    }

    #[test]
    fn period_switches_at_noon() {
        assert_eq!(Period::from_hour(0), Period::Am);
        assert_eq!(Period::from_hour(11), Period::Am);
        assert_eq!(Period::from_hour(12), Period::Pm);
        assert_eq!(Period::from_hour(23), Period::Pm);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for hour in 0..24 {
            let block = TimeBlock::from_hour(hour);
            assert_eq!(block.label().parse::<TimeBlock>().unwrap(), block);
            let period = Period::from_hour(hour);
            assert_eq!(period.label().parse::<Period>().unwrap(), period);
        }
        assert!("Midnightish".parse::<TimeBlock>().is_err());
    }

    #[test]
    fn from_session_derives_all_fields() {
        let session = NewSession {
            activity: "Reading".to_string(),
            category: "Leisure".to_string(),
            mood: "Relaxed".to_string(),
            start_time: dt("2024-01-01 08:00:00"),
            end_time: dt("2024-01-01 08:30:00"),
        };

        let record = TimeLogRecord::from_session(1, &session);
        assert_eq!(record.duration_seconds, 1800);
        assert_eq!(record.start_hour, 8);
        assert_eq!(record.time_block, TimeBlock::EarlyMorning);
        assert_eq!(record.period, Period::Am);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.month, 1);
        assert_eq!(record.year, 2024);
        assert_eq!(record.weekday_label(), "Monday");
    }

    #[test]
    fn hour_float_is_exact() {
        let session = NewSession {
            activity: "Running".to_string(),
            category: "Exercise".to_string(),
            mood: "Focused".to_string(),
            start_time: dt("2024-03-05 06:30:00"),
            end_time: dt("2024-03-05 07:00:00"),
        };

        let record = TimeLogRecord::from_session(1, &session);
        assert!((record.hour_float() - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_enum_labels_with_spaces() {
        let json = serde_json::to_string(&TimeBlock::EarlyMorning).unwrap();
        assert_eq!(json, "\"Early Morning\"");
        let json = serde_json::to_string(&Period::Am).unwrap();
        assert_eq!(json, "\"AM\"");
    }
}

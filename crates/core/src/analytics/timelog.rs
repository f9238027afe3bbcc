//! Time log aggregations

use std::collections::{BTreeSet, HashMap};

use chrono::Datelike;
use mindstock_domain::constants::WEEKDAY_LABELS;
use mindstock_domain::{LogSummary, MindstockError, MoodTimePoint, Result, TimeLogRecord, WeekdayTotal};

/// Summary metrics over a non-empty record slice
///
/// The average is per distinct day present in the slice, not per calendar
/// day of the covered range. Modal category and mood break ties in favour
/// of the value encountered first.
pub fn summarize(records: &[&TimeLogRecord]) -> Result<LogSummary> {
    if records.is_empty() {
        return Err(MindstockError::Validation("no records to summarize".to_string()));
    }

    let total_seconds: i64 = records.iter().map(|r| r.duration_seconds).sum();
    let distinct_days: BTreeSet<_> = records.iter().map(|r| r.date).collect();
    let avg_seconds_per_day = total_seconds as f64 / distinct_days.len() as f64;

    Ok(LogSummary {
        total_seconds,
        avg_seconds_per_day,
        session_count: records.len(),
        top_category: first_encountered_mode(records.iter().map(|r| r.category.as_str())),
        top_mood: first_encountered_mode(records.iter().map(|r| r.mood.as_str())),
    })
}

/// Total duration per weekday, always seven rows Monday through Sunday
pub fn weekday_totals(records: &[&TimeLogRecord]) -> Vec<WeekdayTotal> {
    let mut totals = [0i64; 7];
    for record in records {
        totals[record.date.weekday().num_days_from_monday() as usize] += record.duration_seconds;
    }

    WEEKDAY_LABELS
        .iter()
        .zip(totals)
        .map(|(weekday, total_seconds)| WeekdayTotal {
            weekday: (*weekday).to_string(),
            total_seconds,
        })
        .collect()
}

/// Time-of-day/mood points for the scatter view
///
/// Keys are the exact fractional start hour plus activity and mood; no
/// hour binning. Duration hours are summed per key, keys appear in first
/// encounter order and are then sorted by hour.
pub fn mood_time_points(records: &[&TimeLogRecord]) -> Vec<MoodTimePoint> {
    let mut points: Vec<MoodTimePoint> = Vec::new();

    for record in records {
        let hour_float = record.hour_float();
        let existing = points.iter_mut().find(|p| {
            p.hour_float == hour_float && p.activity == record.activity && p.mood == record.mood
        });
        match existing {
            Some(point) => point.duration_hours += record.duration_hours(),
            None => points.push(MoodTimePoint {
                hour_float,
                activity: record.activity.clone(),
                mood: record.mood.clone(),
                duration_hours: record.duration_hours(),
            }),
        }
    }

    points.sort_by(|a, b| a.hour_float.total_cmp(&b.hour_float));
    points
}

/// Most frequent value; ties go to the value seen first
fn first_encountered_mode<'a>(values: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.clone() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for value in values {
        let count = counts[value];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value.to_string()).unwrap_or_default()
}

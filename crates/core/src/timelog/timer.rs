//! Session timer
//!
//! Holds only the start instant; elapsed time is recomputed on demand so
//! repeated reads stay consistent without any background tick.

use chrono::{Duration, Local, NaiveDateTime};
use mindstock_domain::{MindstockError, Result};

/// A start/stop timer for one session at a time
#[derive(Debug, Clone, Default)]
pub struct Timer {
    started_at: Option<NaiveDateTime>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer at the current wall-clock instant
    pub fn start(&mut self) -> Result<NaiveDateTime> {
        self.start_at(Local::now().naive_local())
    }

    /// Start the timer at an explicit instant
    pub fn start_at(&mut self, at: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.started_at.is_some() {
            return Err(MindstockError::Validation("timer is already running".to_string()));
        }
        self.started_at = Some(at);
        Ok(at)
    }

    /// Stop the timer, returning the recorded start and stop instants
    pub fn stop(&mut self) -> Result<(NaiveDateTime, NaiveDateTime)> {
        self.stop_at(Local::now().naive_local())
    }

    /// Stop the timer at an explicit instant
    pub fn stop_at(&mut self, at: NaiveDateTime) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let started = self
            .started_at
            .take()
            .ok_or_else(|| MindstockError::Validation("timer is not running".to_string()))?;
        if at < started {
            self.started_at = Some(started);
            return Err(MindstockError::Validation(
                "stop instant precedes the start instant".to_string(),
            ));
        }
        Ok((started, at))
    }

    /// Discard the running session, if any
    pub fn reset(&mut self) {
        self.started_at = None;
    }

    /// Elapsed wall-clock time since start; zero when not running
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Local::now().naive_local())
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed().num_seconds()
    }

    /// Elapsed time since start measured against an explicit instant
    pub fn elapsed_at(&self, now: NaiveDateTime) -> Duration {
        match self.started_at {
            Some(started) if now > started => now - started,
            _ => Duration::zero(),
        }
    }

    pub fn elapsed_seconds_at(&self, now: NaiveDateTime) -> i64 {
        self.elapsed_at(now).num_seconds()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn elapsed_is_recomputed_from_the_start_instant() {
        let mut timer = Timer::new();
        timer.start_at(dt("2024-05-01 09:00:00")).unwrap();

        assert_eq!(timer.elapsed_seconds_at(dt("2024-05-01 09:00:30")), 30);
        assert_eq!(timer.elapsed_seconds_at(dt("2024-05-01 09:05:00")), 300);
        assert!(timer.is_running());
    }

    #[test]
    fn stop_returns_both_instants_and_clears_the_timer() {
        let mut timer = Timer::new();
        timer.start_at(dt("2024-05-01 09:00:00")).unwrap();

        let (start, stop) = timer.stop_at(dt("2024-05-01 09:30:00")).unwrap();
        assert_eq!(start, dt("2024-05-01 09:00:00"));
        assert_eq!(stop, dt("2024-05-01 09:30:00"));
        assert!(!timer.is_running());
    }

    #[test]
    fn double_start_and_stray_stop_are_rejected() {
        let mut timer = Timer::new();
        assert!(timer.stop_at(dt("2024-05-01 09:00:00")).is_err());

        timer.start_at(dt("2024-05-01 09:00:00")).unwrap();
        assert!(timer.start_at(dt("2024-05-01 10:00:00")).is_err());
    }

    #[test]
    fn stop_before_start_keeps_the_timer_running() {
        let mut timer = Timer::new();
        timer.start_at(dt("2024-05-01 09:00:00")).unwrap();

        assert!(timer.stop_at(dt("2024-05-01 08:59:00")).is_err());
        assert!(timer.is_running());
    }
}

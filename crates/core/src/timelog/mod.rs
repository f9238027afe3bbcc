//! Time log record store, timer, and persistence ports

pub mod ports;
pub mod service;
pub mod timer;

pub use service::{LogOutcome, TimeLogService};
pub use timer::Timer;

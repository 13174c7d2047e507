//! Core data models for the Attendance Rule Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod coverage;
mod shift;
mod time_of_day;

pub use attendance::{AttendanceEvent, AttendanceStatus, CheckoutRecord, StatusDecision};
pub use coverage::{ShiftCoverageResult, ShiftStatus};
pub use shift::Shift;
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};

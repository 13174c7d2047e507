//! Error types for the Attendance Rule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions the engine refuses to paper over: malformed times,
//! unusable configuration, and invalid record lifecycle transitions.
//! Ordinary domain outcomes (no check-in, empty shift list) are expressed
//! in return values instead.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The main error type for the Attendance Rule Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     input: "9am".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '9am': expected HH:MM (24-hour)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A time-of-day value was not a valid zero-padded `HH:MM` string.
    #[error("Invalid time '{input}': expected HH:MM (24-hour)")]
    InvalidTimeFormat {
        /// The rejected input.
        input: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates an engine invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// A check-in was attempted on a day with no shifts to classify against.
    #[error("No shifts scheduled for {date}")]
    NoShiftsScheduled {
        /// The work date of the attempted check-in.
        date: NaiveDate,
    },

    /// The attendance event already has a check-out.
    #[error("Attendance event for {date} is already checked out")]
    AlreadyCheckedOut {
        /// The work date of the event.
        date: NaiveDate,
    },

    /// A check-out was attempted on an event that never checked in.
    #[error("Attendance event for {date} has no check-in")]
    MissingCheckIn {
        /// The work date of the event.
        date: NaiveDate,
    },

    /// An explicit check-out instant falls before the check-in.
    #[error("Check-out {check_out} for {date} is before the check-in")]
    CheckOutBeforeCheckIn {
        /// The work date of the event.
        date: NaiveDate,
        /// The rejected check-out instant.
        check_out: NaiveDateTime,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

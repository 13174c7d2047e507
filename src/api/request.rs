//! Request types for the Attendance Rule Engine API.
//!
//! This module defines the JSON request bodies for the check-in, check-out
//! and auto-checkout endpoints. Times are `HH:MM` strings and are validated
//! during deserialization.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceEvent, Shift, TimeOfDay};

/// Request body for `POST /check-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The work date.
    pub date: NaiveDate,
    /// The check-in time, omitted or null for a no-show.
    #[serde(default)]
    pub check_in_time: Option<TimeOfDay>,
    /// Whether the employee has approved leave for the day.
    #[serde(default)]
    pub has_approved_leave: bool,
    /// The day's shifts.
    pub shifts: Vec<Shift>,
}

/// Request body for `POST /check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// The open attendance event returned by check-in.
    pub event: AttendanceEvent,
    /// The check-out time.
    pub check_out_time: TimeOfDay,
    /// The check-out date; inferred from the check-in when omitted.
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
}

/// Request body for `POST /auto-checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoCheckoutRequest {
    /// The attendance event to consider.
    pub event: AttendanceEvent,
    /// The shift the event was checked in against.
    pub shift: Shift,
    /// The evaluation instant; the server clock is read once when omitted.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

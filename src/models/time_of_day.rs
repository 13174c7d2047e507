//! Wall-clock time-of-day value type.
//!
//! [`TimeOfDay`] stores minutes since midnight and is the only time
//! representation the rules operate on. `HH:MM` strings are parsed and
//! formatted at the boundary (serde, the HTTP API) and nowhere else.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// The value is always in `[0, 1440)`. Serializes as a zero-padded 24-hour
/// `HH:MM` string.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeOfDay;
///
/// let start: TimeOfDay = "09:30".parse().unwrap();
/// assert_eq!(start.minutes(), 570);
/// assert_eq!(start.to_string(), "09:30");
/// assert!("9h30".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    /// 12:00.
    pub const NOON: TimeOfDay = TimeOfDay(12 * 60);

    /// Builds a time from hours and minutes, returning `None` when out of range.
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(TimeOfDay((hours * 60 + minutes) as u16))
        } else {
            None
        }
    }

    /// Builds a time from minutes since midnight, returning `None` outside `[0, 1440)`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(TimeOfDay(minutes as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// The hour component (0-23).
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// The minute component (0-59).
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Converts to a `chrono::NaiveTime` for combining with calendar dates.
    pub fn to_naive_time(self) -> NaiveTime {
        // hour < 24 and minute < 60 always hold
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds.
    fn from(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidTimeFormat {
            input: s.to_string(),
        };

        // Reject single-digit minutes and seconds before handing to chrono.
        let (_, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if minutes.len() != 2 {
            return Err(invalid());
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

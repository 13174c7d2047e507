//! Attendance records and classification outcomes.
//!
//! This module contains the [`AttendanceStatus`] classification, the
//! [`StatusDecision`] produced for a single check-in against a single shift,
//! the [`AttendanceEvent`] record that carries a day's check-in through to its
//! check-out, and the [`CheckoutRecord`] synthesized by auto-checkout.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_of_day::TimeOfDay;

/// The attendance classification of a check-in.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// let status = AttendanceStatus::OnTime;
/// assert_eq!(status.to_string(), "on_time");
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"on_time\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Arrived early or at the shift start.
    OnTime,
    /// Arrived after the shift start but within the late threshold.
    Late,
    /// Did not check in, or arrived beyond the late threshold.
    Absent,
    /// Covered by approved leave.
    Leave,
}

impl AttendanceStatus {
    /// The wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::OnTime => "on_time",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying one check-in against one shift start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDecision {
    /// The resulting classification.
    pub status: AttendanceStatus,
    /// Minutes late; zero for on-time and leave, `None` when there was no check-in.
    pub late_minutes: Option<i32>,
    /// Whether the caller should immediately synthesize a checkout.
    pub should_auto_checkout: bool,
    /// Human-readable explanation for display by the host.
    pub message: String,
}

/// A day's attendance record.
///
/// Created at check-in, classified once, and closed at most once by either an
/// explicit check-out or an auto-checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// The work date the check-in belongs to.
    pub date: NaiveDate,
    /// The check-in time, or `None` for a no-show.
    pub check_in_time: Option<TimeOfDay>,
    /// The check-out time once the event is closed.
    #[serde(default)]
    pub check_out_time: Option<TimeOfDay>,
    /// Calendar date of the check-out, which may be days after `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    /// Whether the employee has approved leave for the day.
    #[serde(default)]
    pub has_approved_leave: bool,
    /// The classification assigned at check-in.
    pub status: AttendanceStatus,
    /// Minutes late as assigned at check-in.
    #[serde(default)]
    pub late_minutes: Option<i32>,
    /// Whether the check-out was synthesized by the system.
    #[serde(default)]
    pub is_auto_checkout: bool,
    /// Why the system closed the event, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_checkout_reason: Option<String>,
}

impl AttendanceEvent {
    /// Creates an open event carrying the given classification.
    pub fn classified(
        date: NaiveDate,
        check_in_time: Option<TimeOfDay>,
        has_approved_leave: bool,
        decision: &StatusDecision,
    ) -> Self {
        Self {
            date,
            check_in_time,
            check_out_time: None,
            check_out_date: None,
            has_approved_leave,
            status: decision.status,
            late_minutes: decision.late_minutes,
            is_auto_checkout: false,
            auto_checkout_reason: None,
        }
    }

    /// Returns true when the employee checked in and has not yet been checked out.
    pub fn is_open(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_none()
    }

    /// The check-in instant, if there was a check-in.
    pub fn checked_in_at(&self) -> Option<NaiveDateTime> {
        self.check_in_time.map(|time| self.date.and_time(time.to_naive_time()))
    }

    /// The check-out instant once the event is closed.
    ///
    /// Events recorded without a check-out date are read as closing on the
    /// work date, or the day after when the check-out is earlier on the clock
    /// than the check-in.
    pub fn checked_out_at(&self) -> Option<NaiveDateTime> {
        let check_out = self.check_out_time?;
        let date = match self.check_out_date {
            Some(date) => date,
            None => self.next_date_for(check_out)?,
        };
        Some(date.and_time(check_out.to_naive_time()))
    }

    /// Records an explicit check-out at the first `time` not before the check-in.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingCheckIn`] if the event has no check-in
    /// - [`EngineError::AlreadyCheckedOut`] if the event is already closed
    pub fn check_out(&mut self, time: TimeOfDay) -> EngineResult<()> {
        self.ensure_open()?;
        let date = self
            .next_date_for(time)
            .ok_or(EngineError::MissingCheckIn { date: self.date })?;
        self.close(date, time);
        Ok(())
    }

    /// Records an explicit check-out on a given calendar date.
    ///
    /// # Errors
    ///
    /// As [`AttendanceEvent::check_out`], plus
    /// [`EngineError::CheckOutBeforeCheckIn`] when the instant precedes the
    /// check-in.
    pub fn check_out_on(&mut self, date: NaiveDate, time: TimeOfDay) -> EngineResult<()> {
        self.ensure_open()?;
        let check_out = date.and_time(time.to_naive_time());
        if self.checked_in_at().is_some_and(|check_in| check_out < check_in) {
            return Err(EngineError::CheckOutBeforeCheckIn {
                date: self.date,
                check_out,
            });
        }
        self.close(date, time);
        Ok(())
    }

    /// Closes the event with a system-synthesized checkout.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingCheckIn`] if the event has no check-in
    /// - [`EngineError::AlreadyCheckedOut`] if the event is already closed
    pub fn apply_auto_checkout(&mut self, record: &CheckoutRecord) -> EngineResult<()> {
        self.ensure_open()?;
        self.check_out_time = Some(record.check_out_time);
        self.check_out_date = Some(record.date);
        self.is_auto_checkout = true;
        self.auto_checkout_reason = Some(record.reason.clone());
        Ok(())
    }

    fn close(&mut self, date: NaiveDate, time: TimeOfDay) {
        self.check_out_time = Some(time);
        self.check_out_date = Some(date);
        self.is_auto_checkout = false;
    }

    /// The work date, or the day after when `time` is earlier than the check-in.
    fn next_date_for(&self, time: TimeOfDay) -> Option<NaiveDate> {
        let check_in = self.check_in_time?;
        if time >= check_in {
            Some(self.date)
        } else {
            self.date.succ_opt()
        }
    }

    fn ensure_open(&self) -> EngineResult<()> {
        if self.check_in_time.is_none() {
            return Err(EngineError::MissingCheckIn { date: self.date });
        }
        if self.check_out_time.is_some() {
            return Err(EngineError::AlreadyCheckedOut { date: self.date });
        }
        Ok(())
    }
}

/// A checkout synthesized by the auto-checkout resolver.
///
/// The resolver only proposes the record; applying it to an event is the
/// caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Calendar date on which the checkout falls.
    pub date: NaiveDate,
    /// The synthetic check-out time.
    pub check_out_time: TimeOfDay,
    /// Always true for synthesized records.
    pub is_auto_checkout: bool,
    /// Explanation shown to the employee.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn on_time() -> StatusDecision {
        StatusDecision {
            status: AttendanceStatus::OnTime,
            late_minutes: Some(0),
            should_auto_checkout: false,
            message: "On time".to_string(),
        }
    }

    fn open_event() -> AttendanceEvent {
        AttendanceEvent::classified(date(), Some("09:00".parse().unwrap()), false, &on_time())
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&[
            AttendanceStatus::OnTime,
            AttendanceStatus::Late,
            AttendanceStatus::Absent,
            AttendanceStatus::Leave,
        ])
        .unwrap();
        assert_eq!(json, r#"["on_time","late","absent","leave"]"#);
    }

    #[test]
    fn test_classified_event_is_open() {
        let event = open_event();
        assert!(event.is_open());
        assert_eq!(event.status, AttendanceStatus::OnTime);
        assert!(!event.is_auto_checkout);
    }

    #[test]
    fn test_check_out_closes_event() {
        let mut event = open_event();
        event.check_out("17:30".parse().unwrap()).unwrap();
        assert!(!event.is_open());
        assert_eq!(event.check_out_time, Some("17:30".parse().unwrap()));
        assert_eq!(event.check_out_date, Some(date()));
    }

    #[test]
    fn test_check_out_earlier_on_clock_lands_next_day() {
        let mut event = AttendanceEvent::classified(
            date(),
            Some("22:00".parse().unwrap()),
            false,
            &on_time(),
        );
        event.check_out("06:00".parse().unwrap()).unwrap();
        assert_eq!(event.check_out_date, date().succ_opt());
    }

    #[test]
    fn test_check_out_on_later_date() {
        let mut event = open_event();
        let later = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        event.check_out_on(later, "10:00".parse().unwrap()).unwrap();
        assert_eq!(event.checked_out_at(), later.and_hms_opt(10, 0, 0));
    }

    #[test]
    fn test_check_out_on_before_check_in_is_rejected() {
        let mut event = open_event();
        let result = event.check_out_on(date(), "08:00".parse().unwrap());
        assert!(matches!(result, Err(EngineError::CheckOutBeforeCheckIn { .. })));
        assert!(event.is_open());
    }

    #[test]
    fn test_checked_out_at_infers_date_when_missing() {
        let json = r#"{"date": "2026-01-15", "check_in_time": "22:00",
            "check_out_time": "06:00", "status": "on_time"}"#;
        let event: AttendanceEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.checked_out_at(), date().succ_opt().unwrap().and_hms_opt(6, 0, 0));
    }

    #[test]
    fn test_second_check_out_is_rejected() {
        let mut event = open_event();
        event.check_out("17:30".parse().unwrap()).unwrap();
        let result = event.check_out("18:00".parse().unwrap());
        assert_eq!(result, Err(EngineError::AlreadyCheckedOut { date: date() }));
        assert_eq!(event.check_out_time, Some("17:30".parse().unwrap()));
    }

    #[test]
    fn test_check_out_without_check_in_is_rejected() {
        let mut event = AttendanceEvent::classified(
            date(),
            None,
            false,
            &StatusDecision {
                status: AttendanceStatus::Absent,
                late_minutes: None,
                should_auto_checkout: false,
                message: "No check-in recorded".to_string(),
            },
        );
        assert!(!event.is_open());
        assert_eq!(
            event.check_out("17:00".parse().unwrap()),
            Err(EngineError::MissingCheckIn { date: date() })
        );
    }

    #[test]
    fn test_apply_auto_checkout_flags_event() {
        let mut event = open_event();
        let record = CheckoutRecord {
            date: date().succ_opt().unwrap(),
            check_out_time: TimeOfDay::MIDNIGHT,
            is_auto_checkout: true,
            reason: "closed at midnight".to_string(),
        };
        event.apply_auto_checkout(&record).unwrap();
        assert!(event.is_auto_checkout);
        assert_eq!(event.check_out_time, Some(TimeOfDay::MIDNIGHT));
        assert_eq!(event.check_out_date, date().succ_opt());
        assert_eq!(event.auto_checkout_reason.as_deref(), Some("closed at midnight"));
    }

    #[test]
    fn test_event_deserializes_with_defaults() {
        let json = r#"{"date": "2026-01-15", "check_in_time": "08:55", "status": "on_time"}"#;
        let event: AttendanceEvent = serde_json::from_str(json).unwrap();
        assert!(event.is_open());
        assert!(!event.has_approved_leave);
        assert!(event.late_minutes.is_none());
    }
}

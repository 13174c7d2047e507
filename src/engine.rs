//! The attendance engine facade.
//!
//! [`AttendanceEngine`] binds one validated [`AttendanceConfig`] at
//! construction and runs the check-in, check-out and auto-checkout flows on
//! top of the rule functions in [`crate::rules`].

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AttendanceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEvent, CheckoutRecord, Shift, ShiftCoverageResult, StatusDecision, TimeOfDay,
};
use crate::rules::{
    are_shifts_consecutive, calculate_attendance_status, calculate_elapsed_minutes,
    calculate_time_difference, handle_consecutive_shifts, resolve_auto_checkout,
};

/// The result of a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInOutcome {
    /// The shift the check-in was classified against.
    pub primary_shift: Shift,
    /// The classification against the primary shift.
    pub decision: StatusDecision,
    /// The new attendance record, already closed if the check-in was too late.
    pub event: AttendanceEvent,
    /// Which of the day's shifts the check-in covers.
    pub coverage: ShiftCoverageResult,
    /// The checkout synthesized for a check-in beyond the late threshold.
    pub auto_checkout: Option<CheckoutRecord>,
}

/// Time worked by a closed attendance event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSummary {
    /// Minutes between check-in and check-out.
    pub worked_minutes: u32,
    /// The same duration in hours.
    pub worked_hours: Decimal,
}

impl WorkSummary {
    fn from_minutes(worked_minutes: u32) -> Self {
        Self {
            worked_minutes,
            worked_hours: (Decimal::from(worked_minutes) / Decimal::from(60)).normalize(),
        }
    }
}

/// Runs attendance rules against one immutable configuration.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::AttendanceEngine;
/// use attendance_engine::models::{AttendanceStatus, Shift};
/// use chrono::NaiveDate;
///
/// let engine = AttendanceEngine::default();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shifts = vec![Shift::new("09:00".parse().unwrap(), "18:00".parse().unwrap())];
///
/// let outcome = engine
///     .check_in(date, Some("09:20".parse().unwrap()), false, &shifts)
///     .unwrap();
/// assert_eq!(outcome.decision.status, AttendanceStatus::Late);
/// assert_eq!(outcome.event.late_minutes, Some(20));
/// assert!(outcome.event.is_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttendanceEngine {
    config: AttendanceConfig,
}

impl AttendanceEngine {
    /// Creates an engine after validating the configuration.
    pub fn new(config: AttendanceConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the bound configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Classifies a check-in against a single shift start.
    pub fn classify(
        &self,
        check_in: Option<TimeOfDay>,
        shift_start: TimeOfDay,
        has_approved_leave: bool,
    ) -> StatusDecision {
        calculate_attendance_status(check_in, shift_start, has_approved_leave, &self.config)
    }

    /// Matches a check-in against all of a day's shifts.
    pub fn coverage(&self, check_in: TimeOfDay, shifts: &[Shift]) -> ShiftCoverageResult {
        handle_consecutive_shifts(check_in, shifts, &self.config)
    }

    /// Records a check-in attempt for `date`.
    ///
    /// The check-in is classified against the earliest covered shift, or the
    /// shift whose start is nearest when none is covered. A no-show is
    /// classified against the day's first shift. A check-in beyond the late
    /// threshold is closed immediately at the check-in time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoShiftsScheduled`] when `shifts` is empty.
    pub fn check_in(
        &self,
        date: NaiveDate,
        check_in: Option<TimeOfDay>,
        has_approved_leave: bool,
        shifts: &[Shift],
    ) -> EngineResult<CheckInOutcome> {
        let primary_shift = self
            .select_primary_shift(check_in, shifts)
            .ok_or(EngineError::NoShiftsScheduled { date })?;

        let decision = self.classify(check_in, primary_shift.start, has_approved_leave);
        let mut event = AttendanceEvent::classified(date, check_in, has_approved_leave, &decision);

        let coverage = match check_in {
            Some(time) => self.coverage(time, shifts),
            None => ShiftCoverageResult {
                is_consecutive: are_shifts_consecutive(shifts, &self.config),
                ..ShiftCoverageResult::default()
            },
        };

        let auto_checkout = match (decision.should_auto_checkout, check_in) {
            (true, Some(time)) => {
                let record = CheckoutRecord {
                    date,
                    check_out_time: time,
                    is_auto_checkout: true,
                    reason: decision.message.clone(),
                };
                event.apply_auto_checkout(&record)?;
                Some(record)
            }
            _ => None,
        };

        info!(
            date = %date,
            shift = %primary_shift.label(),
            status = %decision.status,
            covered = coverage.covered_shifts.len(),
            "Recorded check-in"
        );

        Ok(CheckInOutcome {
            primary_shift,
            decision,
            event,
            coverage,
            auto_checkout,
        })
    }

    /// Records an explicit check-out and returns the time worked.
    ///
    /// With no `date` the check-out lands on the work date, or the day after
    /// when `time` is earlier on the clock than the check-in.
    ///
    /// # Errors
    ///
    /// Propagates [`AttendanceEvent::check_out`] and
    /// [`AttendanceEvent::check_out_on`] errors.
    pub fn check_out(
        &self,
        event: &mut AttendanceEvent,
        date: Option<NaiveDate>,
        time: TimeOfDay,
    ) -> EngineResult<WorkSummary> {
        match date {
            Some(date) => event.check_out_on(date, time)?,
            None => event.check_out(time)?,
        }
        let summary = Self::work_summary(event)
            .ok_or(EngineError::MissingCheckIn { date: event.date })?;
        info!(
            date = %event.date,
            check_out = ?event.checked_out_at(),
            worked_minutes = summary.worked_minutes,
            "Recorded check-out"
        );
        Ok(summary)
    }

    /// Proposes an auto-checkout for an open event, if one is due at `now`.
    pub fn auto_checkout(
        &self,
        event: &AttendanceEvent,
        shift: &Shift,
        now: NaiveDateTime,
    ) -> Option<CheckoutRecord> {
        resolve_auto_checkout(event, shift, now, &self.config)
    }

    /// Applies an auto-checkout to the event if one is due at `now`.
    ///
    /// Returns the applied record, or `None` if the event was left untouched.
    pub fn close_if_due(
        &self,
        event: &mut AttendanceEvent,
        shift: &Shift,
        now: NaiveDateTime,
    ) -> EngineResult<Option<CheckoutRecord>> {
        let Some(record) = self.auto_checkout(event, shift, now) else {
            return Ok(None);
        };
        event.apply_auto_checkout(&record)?;
        info!(date = %event.date, check_out = %record.check_out_time, "Auto-checkout applied");
        Ok(Some(record))
    }

    /// Time worked by a closed event, or `None` while it is open or has no check-in.
    ///
    /// Counts from the check-in instant to the check-out instant, so a session
    /// closed days later keeps every day in between.
    pub fn work_summary(event: &AttendanceEvent) -> Option<WorkSummary> {
        let check_in = event.checked_in_at()?;
        let check_out = event.checked_out_at()?;
        Some(WorkSummary::from_minutes(calculate_elapsed_minutes(check_in, check_out)))
    }

    fn select_primary_shift(&self, check_in: Option<TimeOfDay>, shifts: &[Shift]) -> Option<Shift> {
        let Some(check_in) = check_in else {
            return shifts.iter().min_by_key(|s| s.start).cloned();
        };

        let coverage = self.coverage(check_in, shifts);
        if let Some(first) = coverage.covered_shifts.first() {
            return Some(first.clone());
        }

        let nearest = shifts
            .iter()
            .min_by_key(|s| (calculate_time_difference(check_in, s.start).abs(), s.start))
            .cloned();
        debug!(
            check_in = %check_in,
            nearest = ?nearest.as_ref().map(Shift::label),
            "No shift covered; using nearest"
        );
        nearest
    }
}

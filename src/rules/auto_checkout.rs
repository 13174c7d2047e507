//! Auto-checkout resolution for forgotten check-outs.
//!
//! Day shifts left open are closed at `auto_checkout_time` (midnight by
//! default). Night and cross-midnight shifts are closed at `noon_cutoff_time`
//! the following day. Every function here is pure: it proposes a
//! [`CheckoutRecord`] and leaves applying it to the caller.

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::config::AttendanceConfig;
use crate::models::{AttendanceEvent, CheckoutRecord, Shift, TimeOfDay};

/// Returns true when the shift ends on the following calendar day.
pub fn is_cross_midnight_shift(shift: &Shift) -> bool {
    shift.is_cross_midnight()
}

/// Returns true when the shift starts at or after `night_shift_start_time`.
pub fn is_night_shift(shift: &Shift, config: &AttendanceConfig) -> bool {
    shift.start >= config.night_shift_start_time
}

/// Returns true when the shift stays within one calendar day and ends at or
/// before `day_shift_end_time`.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::models::Shift;
/// use attendance_engine::rules::is_day_shift;
///
/// let shift = |a: &str, b: &str| Shift::new(a.parse().unwrap(), b.parse().unwrap());
/// let config = AttendanceConfig::default();
///
/// assert!(is_day_shift(&shift("09:00", "17:00"), &config));
/// assert!(!is_day_shift(&shift("22:00", "06:00"), &config));
/// ```
pub fn is_day_shift(shift: &Shift, config: &AttendanceConfig) -> bool {
    !shift.is_cross_midnight() && shift.end <= config.day_shift_end_time
}

/// Returns true when `current_time` lies in the late-night window that starts
/// at `auto_checkout_time` and ends at `early_morning_end_time`.
///
/// The window may wrap past midnight when `auto_checkout_time` is configured
/// later than `early_morning_end_time`.
///
/// This is a scheduling gate for hosts that sweep open day-shift events on a
/// timer. The resolvers below do not consult it: they compare `now` against a
/// dated cutoff, so a sweep that runs after the window still closes the event.
pub fn should_auto_checkout_at_midnight(current_time: TimeOfDay, config: &AttendanceConfig) -> bool {
    let from = config.auto_checkout_time;
    let until = config.early_morning_end_time;

    if from <= until {
        current_time >= from && current_time < until
    } else {
        current_time >= from || current_time < until
    }
}

/// Closes a forgotten day shift at `auto_checkout_time`.
///
/// Returns `None` for shifts that are not day shifts, for events that are not
/// open, and until `now` reaches the first `auto_checkout_time` after the
/// check-in.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::models::{AttendanceEvent, AttendanceStatus, Shift, StatusDecision};
/// use attendance_engine::rules::auto_checkout_at_midnight;
/// use chrono::NaiveDate;
///
/// let config = AttendanceConfig::default();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let decision = StatusDecision {
///     status: AttendanceStatus::OnTime,
///     late_minutes: Some(0),
///     should_auto_checkout: false,
///     message: "On time".to_string(),
/// };
/// let event = AttendanceEvent::classified(date, Some("09:00".parse().unwrap()), false, &decision);
/// let shift = Shift::new("09:00".parse().unwrap(), "17:00".parse().unwrap());
///
/// let now = date.succ_opt().unwrap().and_hms_opt(0, 30, 0).unwrap();
/// let record = auto_checkout_at_midnight(&event, &shift, now, &config).unwrap();
/// assert_eq!(record.check_out_time.to_string(), "00:00");
/// assert!(record.is_auto_checkout);
/// ```
pub fn auto_checkout_at_midnight(
    event: &AttendanceEvent,
    shift: &Shift,
    now: NaiveDateTime,
    config: &AttendanceConfig,
) -> Option<CheckoutRecord> {
    if !is_day_shift(shift, config) {
        return None;
    }
    let check_in = open_check_in(event)?;

    let cutoff = next_occurrence_after(event.date, check_in, config.auto_checkout_time)?;
    synthesize(
        now,
        cutoff,
        format!(
            "Forgot to check out: closed automatically at {} (day shift)",
            config.auto_checkout_time
        ),
    )
}

/// Closes a forgotten cross-midnight shift.
///
/// Night shifts are closed at `noon_cutoff_time` on the day after the work
/// date. A day shift that happens to run past midnight is closed at the first
/// `auto_checkout_time` after the check-in. Returns `None` for shifts that do
/// not cross midnight, for events that are not open, and until the cutoff.
pub fn handle_cross_midnight_shift(
    event: &AttendanceEvent,
    shift: &Shift,
    now: NaiveDateTime,
    config: &AttendanceConfig,
) -> Option<CheckoutRecord> {
    if !is_cross_midnight_shift(shift) {
        return None;
    }
    let check_in = open_check_in(event)?;

    if is_night_shift(shift, config) {
        let cutoff = noon_cutoff_after(event.date, config)?;
        synthesize(
            now,
            cutoff,
            format!(
                "Forgot to check out: closed automatically at {} (night shift)",
                config.noon_cutoff_time
            ),
        )
    } else {
        let cutoff = next_occurrence_after(event.date, check_in, config.auto_checkout_time)?;
        synthesize(
            now,
            cutoff,
            format!(
                "Forgot to check out: closed automatically at {} (day shift crossing midnight)",
                config.auto_checkout_time
            ),
        )
    }
}

/// Applies whichever auto-checkout policy fits the shift.
///
/// Cross-midnight shifts take the cross-midnight path and day shifts the
/// midnight path. Evening shifts that neither cross midnight nor end by
/// `day_shift_end_time` are closed at the noon cutoff when they are night
/// shifts, and at `auto_checkout_time` otherwise.
pub fn resolve_auto_checkout(
    event: &AttendanceEvent,
    shift: &Shift,
    now: NaiveDateTime,
    config: &AttendanceConfig,
) -> Option<CheckoutRecord> {
    if is_cross_midnight_shift(shift) {
        return handle_cross_midnight_shift(event, shift, now, config);
    }
    if is_day_shift(shift, config) {
        return auto_checkout_at_midnight(event, shift, now, config);
    }

    let check_in = open_check_in(event)?;
    if is_night_shift(shift, config) {
        let cutoff = noon_cutoff_after(event.date, config)?;
        synthesize(
            now,
            cutoff,
            format!(
                "Forgot to check out: closed automatically at {} (night shift)",
                config.noon_cutoff_time
            ),
        )
    } else {
        let cutoff = next_occurrence_after(event.date, check_in, config.auto_checkout_time)?;
        synthesize(
            now,
            cutoff,
            format!(
                "Forgot to check out: closed automatically at {} (evening shift)",
                config.auto_checkout_time
            ),
        )
    }
}

fn open_check_in(event: &AttendanceEvent) -> Option<TimeOfDay> {
    if event.is_open() {
        event.check_in_time
    } else {
        None
    }
}

/// The first instant at `time` strictly after the check-in on `date`.
fn next_occurrence_after(
    date: NaiveDate,
    check_in: TimeOfDay,
    time: TimeOfDay,
) -> Option<NaiveDateTime> {
    let checked_in_at = date.and_time(check_in.to_naive_time());
    let candidate = date.and_time(time.to_naive_time());
    if candidate > checked_in_at {
        Some(candidate)
    } else {
        candidate.checked_add_days(Days::new(1))
    }
}

fn noon_cutoff_after(date: NaiveDate, config: &AttendanceConfig) -> Option<NaiveDateTime> {
    date.checked_add_days(Days::new(1))
        .map(|next| next.and_time(config.noon_cutoff_time.to_naive_time()))
}

fn synthesize(now: NaiveDateTime, cutoff: NaiveDateTime, reason: String) -> Option<CheckoutRecord> {
    if now < cutoff {
        return None;
    }

    debug!(cutoff = %cutoff, now = %now, reason = %reason, "Synthesizing auto-checkout");
    Some(CheckoutRecord {
        date: cutoff.date(),
        check_out_time: TimeOfDay::from(cutoff.time()),
        is_auto_checkout: true,
        reason,
    })
}

//! Attendance status classification.
//!
//! This module decides whether a single check-in is on time, late or absent
//! relative to a shift start, or whether approved leave applies.

use tracing::debug;

use crate::config::AttendanceConfig;
use crate::models::{AttendanceStatus, StatusDecision, TimeOfDay};

use super::time_arithmetic::calculate_time_difference;

/// Classifies a check-in against a shift start.
///
/// Rules are applied in order, first match wins:
///
/// 1. Approved leave: `leave`, regardless of the check-in.
/// 2. No check-in: `absent` with no late minutes.
/// 3. At or before the start (within the grace period, or earlier still): `on_time`.
/// 4. Up to `late_threshold_minutes` after the start: `late`.
/// 5. Beyond the late threshold: `absent`, and the caller should synthesize a
///    checkout immediately.
///
/// Arriving earlier than the grace period is still `on_time`; only lateness
/// counts against the employee.
///
/// # Examples
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::models::AttendanceStatus;
/// use attendance_engine::rules::calculate_attendance_status;
///
/// let config = AttendanceConfig::default();
/// let start = "09:00".parse().unwrap();
///
/// let late = calculate_attendance_status(Some("09:20".parse().unwrap()), start, false, &config);
/// assert_eq!(late.status, AttendanceStatus::Late);
/// assert_eq!(late.late_minutes, Some(20));
///
/// let absent = calculate_attendance_status(Some("09:35".parse().unwrap()), start, false, &config);
/// assert_eq!(absent.status, AttendanceStatus::Absent);
/// assert!(absent.should_auto_checkout);
/// ```
pub fn calculate_attendance_status(
    check_in: Option<TimeOfDay>,
    shift_start: TimeOfDay,
    has_approved_leave: bool,
    config: &AttendanceConfig,
) -> StatusDecision {
    if has_approved_leave {
        return StatusDecision {
            status: AttendanceStatus::Leave,
            late_minutes: Some(0),
            should_auto_checkout: false,
            message: "Approved leave".to_string(),
        };
    }

    let Some(check_in) = check_in else {
        return StatusDecision {
            status: AttendanceStatus::Absent,
            late_minutes: None,
            should_auto_checkout: false,
            message: "No check-in recorded".to_string(),
        };
    };

    let diff = calculate_time_difference(check_in, shift_start);
    let grace = config.grace_period_minutes as i32;
    let threshold = config.late_threshold_minutes as i32;

    let decision = if diff <= 0 {
        let early = -diff;
        let message = if early == 0 {
            "On time".to_string()
        } else if early <= grace {
            format!("On time, arrived {} minutes early", early)
        } else {
            format!(
                "Arrived {} minutes early, before the {} minute grace period",
                early, grace
            )
        };
        StatusDecision {
            status: AttendanceStatus::OnTime,
            late_minutes: Some(0),
            should_auto_checkout: false,
            message,
        }
    } else if diff <= threshold {
        StatusDecision {
            status: AttendanceStatus::Late,
            late_minutes: Some(diff),
            should_auto_checkout: false,
            message: format!("Late by {} minutes", diff),
        }
    } else {
        StatusDecision {
            status: AttendanceStatus::Absent,
            late_minutes: Some(diff),
            should_auto_checkout: true,
            message: format!(
                "Absent: {} minutes late, exceeds the {} minute threshold",
                diff, threshold
            ),
        }
    };

    debug!(
        check_in = %check_in,
        shift_start = %shift_start,
        diff,
        status = %decision.status,
        "Classified check-in"
    );

    decision
}

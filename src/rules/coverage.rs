//! Shift coverage and consecutive-shift detection.
//!
//! A day may carry several shifts. This module works out which of them a
//! single check-in satisfies, and whether the day's shifts form one
//! back-to-back chain.

use tracing::debug;

use crate::config::AttendanceConfig;
use crate::models::{Shift, ShiftCoverageResult, ShiftStatus, TimeOfDay};

use super::status::calculate_attendance_status;
use super::time_arithmetic::calculate_time_difference;

/// Returns shifts sorted by start time.
fn sorted_by_start(shifts: &[Shift]) -> Vec<Shift> {
    let mut sorted = shifts.to_vec();
    sorted.sort_by_key(|s| s.start);
    sorted
}

/// Returns true when every adjacent pair of shifts, ordered by start, is
/// separated by at most `consecutive_shift_gap_minutes`.
///
/// Overlapping shifts have a negative gap and are therefore consecutive.
/// Fewer than two shifts are never consecutive.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::models::Shift;
/// use attendance_engine::rules::are_shifts_consecutive;
///
/// let shift = |a: &str, b: &str| Shift::new(a.parse().unwrap(), b.parse().unwrap());
/// let config = AttendanceConfig::default();
///
/// assert!(are_shifts_consecutive(&[shift("09:00", "10:00"), shift("10:00", "11:00")], &config));
/// assert!(!are_shifts_consecutive(&[shift("09:00", "10:00"), shift("10:45", "11:00")], &config));
/// ```
pub fn are_shifts_consecutive(shifts: &[Shift], config: &AttendanceConfig) -> bool {
    if shifts.len() < 2 {
        return false;
    }

    let gap_limit = config.consecutive_shift_gap_minutes as i64;
    sorted_by_start(shifts).windows(2).all(|pair| {
        let gap = pair[1].start.minutes() as i64 - pair[0].end.minutes() as i64;
        gap <= gap_limit
    })
}

/// Returns the shifts whose start lies within the grace period either side of
/// the check-in, preserving input order.
///
/// The distance is measured with midnight wraparound, so a 23:55 check-in
/// covers a 00:05 shift.
pub fn get_covered_shifts(
    check_in: TimeOfDay,
    shifts: &[Shift],
    config: &AttendanceConfig,
) -> Vec<Shift> {
    let grace = config.grace_period_minutes as i32;
    shifts
        .iter()
        .filter(|shift| calculate_time_difference(check_in, shift.start).abs() <= grace)
        .cloned()
        .collect()
}

/// Matches one check-in against all of a day's shifts.
///
/// Shifts are sorted by start, tested for consecutiveness, filtered to the
/// ones the check-in covers, and each covered shift is classified on its own
/// start time.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::models::{AttendanceStatus, Shift};
/// use attendance_engine::rules::handle_consecutive_shifts;
///
/// let shift = |a: &str, b: &str| Shift::new(a.parse().unwrap(), b.parse().unwrap());
/// let shifts = vec![shift("09:10", "12:00"), shift("09:00", "09:10")];
///
/// let result = handle_consecutive_shifts("09:05".parse().unwrap(), &shifts, &AttendanceConfig::default());
/// assert!(result.is_consecutive);
/// assert_eq!(result.covered_shifts.len(), 2);
/// assert_eq!(result.per_shift_status[0].decision.status, AttendanceStatus::Late);
/// assert_eq!(result.per_shift_status[1].decision.status, AttendanceStatus::OnTime);
/// ```
pub fn handle_consecutive_shifts(
    check_in: TimeOfDay,
    today_shifts: &[Shift],
    config: &AttendanceConfig,
) -> ShiftCoverageResult {
    let sorted = sorted_by_start(today_shifts);
    let is_consecutive = are_shifts_consecutive(&sorted, config);
    let covered_shifts = get_covered_shifts(check_in, &sorted, config);

    let per_shift_status: Vec<ShiftStatus> = covered_shifts
        .iter()
        .map(|shift| ShiftStatus {
            shift: shift.clone(),
            decision: calculate_attendance_status(Some(check_in), shift.start, false, config),
        })
        .collect();

    debug!(
        check_in = %check_in,
        shifts = sorted.len(),
        covered = covered_shifts.len(),
        is_consecutive,
        "Evaluated shift coverage"
    );

    ShiftCoverageResult {
        covered_shifts,
        is_consecutive,
        per_shift_status,
    }
}

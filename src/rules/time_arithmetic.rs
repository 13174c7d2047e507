//! Time-of-day arithmetic.
//!
//! Conversions between `HH:MM` strings and minute offsets, and signed
//! differences between two wall-clock times that tolerate the midnight
//! wraparound.

use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{MINUTES_PER_DAY, TimeOfDay};

/// Half a day in minutes; the horizon beyond which a difference is assumed to wrap.
const HALF_DAY_MINUTES: i32 = 720;

/// Converts an `HH:MM` string to minutes since midnight.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// for anything that is not a valid 24-hour time.
///
/// # Example
///
/// ```
/// use attendance_engine::rules::time_to_minutes;
///
/// assert_eq!(time_to_minutes("00:00").unwrap(), 0);
/// assert_eq!(time_to_minutes("09:15").unwrap(), 555);
/// assert!(time_to_minutes("").is_err());
/// ```
pub fn time_to_minutes(time: &str) -> EngineResult<u32> {
    time.parse::<TimeOfDay>().map(TimeOfDay::minutes)
}

/// Formats minutes as a zero-padded `HH:MM` string.
///
/// The value is not wrapped: callers wanting a wall-clock time must first
/// bring it into `[0, 1440)`.
///
/// # Example
///
/// ```
/// use attendance_engine::rules::minutes_to_time;
///
/// assert_eq!(minutes_to_time(545), "09:05");
/// assert_eq!(minutes_to_time(1500), "25:00");
/// ```
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Returns `check_in - shift_start` in minutes, corrected for midnight wraparound.
///
/// A naive difference above +720 has a day subtracted (the shift started just
/// after midnight and the check-in came just before it); one below -720 has a
/// day added. No legitimate check-in is more than 12 hours from its shift.
///
/// # Example
///
/// ```
/// use attendance_engine::rules::calculate_time_difference;
///
/// let diff = calculate_time_difference("23:53".parse().unwrap(), "00:00".parse().unwrap());
/// assert_eq!(diff, -7);
/// ```
pub fn calculate_time_difference(check_in: TimeOfDay, shift_start: TimeOfDay) -> i32 {
    let day = MINUTES_PER_DAY as i32;
    let diff = check_in.minutes() as i32 - shift_start.minutes() as i32;

    if diff > HALF_DAY_MINUTES {
        diff - day
    } else if diff < -HALF_DAY_MINUTES {
        diff + day
    } else {
        diff
    }
}

/// Minutes worked between a check-in and a check-out.
///
/// A check-out earlier on the clock face than the check-in is taken to be on
/// the following day.
pub fn calculate_work_minutes(check_in: TimeOfDay, check_out: TimeOfDay) -> u32 {
    if check_out >= check_in {
        check_out.minutes() - check_in.minutes()
    } else {
        MINUTES_PER_DAY - check_in.minutes() + check_out.minutes()
    }
}

/// Whole minutes elapsed between two instants, or zero if `to` precedes `from`.
///
/// Unlike [`calculate_work_minutes`] this counts every day in between, so a
/// session left open for more than a day keeps its full length.
///
/// # Example
///
/// ```
/// use attendance_engine::rules::calculate_elapsed_minutes;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let from = day.and_hms_opt(11, 30, 0).unwrap();
/// let to = day.succ_opt().unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(calculate_elapsed_minutes(from, to), 1470);
/// ```
pub fn calculate_elapsed_minutes(from: NaiveDateTime, to: NaiveDateTime) -> u32 {
    (to - from).num_minutes().clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("18:00").unwrap(), 1080);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_time_to_minutes_rejects_garbage() {
        assert!(time_to_minutes("").is_err());
        assert!(time_to_minutes("noon").is_err());
        assert!(time_to_minutes("25:10").is_err());
    }

    #[test]
    fn test_minutes_to_time_zero_pads() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(65), "01:05");
        assert_eq!(minutes_to_time(1439), "23:59");
    }

    #[test]
    fn test_difference_without_wraparound() {
        assert_eq!(calculate_time_difference(t("09:20"), t("09:00")), 20);
        assert_eq!(calculate_time_difference(t("08:50"), t("09:00")), -10);
    }

    #[test]
    fn test_difference_check_in_before_midnight() {
        // Naive difference is +1433; the correction must fire.
        assert_eq!(calculate_time_difference(t("23:53"), t("00:00")), -7);
    }

    #[test]
    fn test_difference_check_in_after_midnight() {
        // Shift starts 23:50, employee arrives 00:05 the next morning.
        assert_eq!(calculate_time_difference(t("00:05"), t("23:50")), 15);
    }

    #[test]
    fn test_difference_exactly_half_day_is_not_wrapped() {
        assert_eq!(calculate_time_difference(t("21:00"), t("09:00")), 720);
        assert_eq!(calculate_time_difference(t("09:00"), t("21:00")), -720);
    }

    #[test]
    fn test_work_minutes_same_day() {
        assert_eq!(calculate_work_minutes(t("09:00"), t("17:30")), 510);
    }

    #[test]
    fn test_work_minutes_across_midnight() {
        assert_eq!(calculate_work_minutes(t("22:00"), t("06:00")), 480);
        assert_eq!(calculate_work_minutes(t("22:00"), t("12:00")), 840);
    }

    #[test]
    fn test_elapsed_minutes_counts_whole_days() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let check_in = day.and_hms_opt(11, 30, 0).unwrap();
        let next_noon = day.succ_opt().unwrap().and_hms_opt(12, 0, 0).unwrap();
        let three_days_later = check_in.checked_add_days(chrono::Days::new(3)).unwrap();

        assert_eq!(calculate_elapsed_minutes(check_in, next_noon), 1470);
        assert_eq!(calculate_elapsed_minutes(check_in, three_days_later), 3 * 1440);
    }

    #[test]
    fn test_elapsed_minutes_never_negative() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let later = day.and_hms_opt(17, 0, 0).unwrap();
        let earlier = day.and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(calculate_elapsed_minutes(later, earlier), 0);
    }

    proptest! {
        #[test]
        fn prop_elapsed_matches_clock_rule_within_a_day(a in 0u32..1440, b in 0u32..1440) {
            let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
            let check_in = TimeOfDay::from_minutes(a).unwrap();
            let check_out = TimeOfDay::from_minutes(b).unwrap();
            let out_date = if check_out >= check_in { day } else { day.succ_opt().unwrap() };

            let elapsed = calculate_elapsed_minutes(
                day.and_time(check_in.to_naive_time()),
                out_date.and_time(check_out.to_naive_time()),
            );
            prop_assert_eq!(elapsed, calculate_work_minutes(check_in, check_out));
        }

        #[test]
        fn prop_difference_with_self_is_zero(m in 0u32..1440) {
            let time = TimeOfDay::from_minutes(m).unwrap();
            prop_assert_eq!(calculate_time_difference(time, time), 0);
        }

        #[test]
        fn prop_difference_stays_within_half_day(a in 0u32..1440, b in 0u32..1440) {
            let diff = calculate_time_difference(
                TimeOfDay::from_minutes(a).unwrap(),
                TimeOfDay::from_minutes(b).unwrap(),
            );
            prop_assert!((-720..=720).contains(&diff));
        }

        #[test]
        fn prop_minutes_round_trip_through_strings(m in 0u32..1440) {
            prop_assert_eq!(time_to_minutes(&minutes_to_time(m)).unwrap(), m);
        }
    }
}

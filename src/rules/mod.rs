//! Attendance rules.
//!
//! This module contains the rule functions of the engine, leaves first: time
//! arithmetic, status classification against a shift start, coverage of a
//! day's shifts by one check-in, and auto-checkout resolution for sessions
//! nobody closed. Every function takes the [`AttendanceConfig`] it needs as
//! an explicit parameter.
//!
//! [`AttendanceConfig`]: crate::config::AttendanceConfig

mod auto_checkout;
mod coverage;
mod status;
mod time_arithmetic;

pub use auto_checkout::{
    auto_checkout_at_midnight, handle_cross_midnight_shift, is_cross_midnight_shift,
    is_day_shift, is_night_shift, resolve_auto_checkout, should_auto_checkout_at_midnight,
};
pub use coverage::{are_shifts_consecutive, get_covered_shifts, handle_consecutive_shifts};
pub use status::calculate_attendance_status;
pub use time_arithmetic::{
    calculate_elapsed_minutes, calculate_time_difference, calculate_work_minutes,
    minutes_to_time, time_to_minutes,
};

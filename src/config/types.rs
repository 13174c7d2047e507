//! Configuration types for attendance rules.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeOfDay;

/// Thresholds and cutoff times used by every attendance rule.
///
/// Read-only once constructed. Every field has a default, so a YAML file only
/// needs to list the values it overrides.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
///
/// let config = AttendanceConfig::default();
/// assert_eq!(config.grace_period_minutes, 15);
/// assert_eq!(config.late_threshold_minutes, 30);
/// assert_eq!(config.noon_cutoff_time.to_string(), "12:00");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Minutes before or at the shift start that still count as on-time.
    pub grace_period_minutes: u32,
    /// Maximum minutes late before a check-in is classified absent.
    pub late_threshold_minutes: u32,
    /// Synthetic checkout time for day shifts.
    pub auto_checkout_time: TimeOfDay,
    /// Synthetic checkout time for night shifts.
    pub noon_cutoff_time: TimeOfDay,
    /// Shifts starting at or after this time are night shifts.
    pub night_shift_start_time: TimeOfDay,
    /// Shifts ending at or before this time (without crossing midnight) are day shifts.
    pub day_shift_end_time: TimeOfDay,
    /// End of the early-morning window in which midnight auto-checkout applies.
    pub early_morning_end_time: TimeOfDay,
    /// Maximum gap between one shift's end and the next one's start for back-to-back shifts.
    pub consecutive_shift_gap_minutes: u32,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        let evening = TimeOfDay::from_hm(18, 0).unwrap_or(TimeOfDay::NOON);
        Self {
            grace_period_minutes: 15,
            late_threshold_minutes: 30,
            auto_checkout_time: TimeOfDay::MIDNIGHT,
            noon_cutoff_time: TimeOfDay::NOON,
            night_shift_start_time: evening,
            day_shift_end_time: evening,
            early_morning_end_time: TimeOfDay::from_hm(6, 0).unwrap_or(TimeOfDay::MIDNIGHT),
            consecutive_shift_gap_minutes: 30,
        }
    }
}

impl AttendanceConfig {
    /// Checks the invariants the rules rely on.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the grace period is not
    /// strictly shorter than the late threshold, or if the late threshold
    /// reaches the 12-hour wraparound horizon of time differences.
    pub fn validate(&self) -> EngineResult<()> {
        if self.grace_period_minutes >= self.late_threshold_minutes {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "grace_period_minutes ({}) must be less than late_threshold_minutes ({})",
                    self.grace_period_minutes, self.late_threshold_minutes
                ),
            });
        }
        if self.late_threshold_minutes >= 720 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "late_threshold_minutes ({}) must be under 720",
                    self.late_threshold_minutes
                ),
            });
        }
        Ok(())
    }
}

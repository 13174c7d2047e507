//! Shift coverage results.
//!
//! A single check-in can satisfy several closely spaced shifts. These types
//! describe which shifts were satisfied and how each one was classified.

use serde::{Deserialize, Serialize};

use super::attendance::StatusDecision;
use super::shift::Shift;

/// The classification of a check-in against one covered shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStatus {
    /// The covered shift.
    pub shift: Shift,
    /// The classification against that shift's start.
    pub decision: StatusDecision,
}

/// The result of matching one check-in against a day's shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCoverageResult {
    /// Shifts satisfied by the check-in, ordered by start time.
    pub covered_shifts: Vec<Shift>,
    /// Whether the day's shifts form one back-to-back chain.
    pub is_consecutive: bool,
    /// One classification per covered shift, in the same order.
    pub per_shift_status: Vec<ShiftStatus>,
}

impl ShiftCoverageResult {
    /// Returns true when the check-in satisfied no shift.
    pub fn is_empty(&self) -> bool {
        self.covered_shifts.is_empty()
    }
}

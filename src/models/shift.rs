//! Shift model.
//!
//! A [`Shift`] is one scheduled working window for a day, expressed as
//! wall-clock start and end times. Shifts whose end is earlier than their
//! start run past midnight into the next calendar day.

use serde::{Deserialize, Deserializer, Serialize};

use super::time_of_day::TimeOfDay;

/// Represents a scheduled shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Optional identifier assigned by the schedule. Numeric ids are accepted
    /// and stored in their decimal form.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "id_from_string_or_number"
    )]
    pub id: Option<String>,
    /// Optional display name (e.g., "Morning").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The scheduled start time.
    pub start: TimeOfDay,
    /// The scheduled end time.
    pub end: TimeOfDay,
}

impl Shift {
    /// Creates an anonymous shift from start and end times.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id: None,
            name: None,
            start,
            end,
        }
    }

    /// Returns true when the shift ends on the following calendar day.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Shift;
    ///
    /// let night = Shift::new("22:00".parse().unwrap(), "06:00".parse().unwrap());
    /// assert!(night.is_cross_midnight());
    ///
    /// let day = Shift::new("09:00".parse().unwrap(), "17:00".parse().unwrap());
    /// assert!(!day.is_cross_midnight());
    /// ```
    pub fn is_cross_midnight(&self) -> bool {
        self.end < self.start
    }

    /// A short label for logs and messages: the name, the id, or the time range.
    pub fn label(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => format!("{}-{}", self.start, self.end),
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: &str, end: &str) -> Shift {
        Shift::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_day_shift_stays_on_one_day() {
        assert!(!shift("09:00", "18:00").is_cross_midnight());
        assert!(shift("22:00", "06:00").is_cross_midnight());
    }

    #[test]
    fn test_zero_length_shift_is_not_cross_midnight() {
        let zero = shift("09:00", "09:00");
        assert!(!zero.is_cross_midnight());
    }

    #[test]
    fn test_shift_ending_at_midnight_crosses() {
        // 00:00 is numerically earlier than any start after midnight.
        let evening = shift("16:00", "00:00");
        assert!(evening.is_cross_midnight());
    }

    #[test]
    fn test_label_prefers_name_then_id() {
        let mut s = shift("09:00", "17:00");
        assert_eq!(s.label(), "09:00-17:00");
        s.id = Some("S1".to_string());
        assert_eq!(s.label(), "S1");
        s.name = Some("Morning".to_string());
        assert_eq!(s.label(), "Morning");
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{"id": "night", "start": "22:00", "end": "06:00"}"#;
        let parsed: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("night"));
        assert!(parsed.name.is_none());
        assert!(parsed.is_cross_midnight());
    }

    #[test]
    fn test_shift_accepts_numeric_id() {
        let json = r#"{"id": 7, "name": "Late", "start": "14:00", "end": "22:00"}"#;
        let parsed: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("7"));
        assert_eq!(parsed.label(), "Late");
    }

    #[test]
    fn test_shift_rejects_bad_time() {
        let json = r#"{"start": "9am", "end": "17:00"}"#;
        assert!(serde_json::from_str::<Shift>(json).is_err());
    }
}

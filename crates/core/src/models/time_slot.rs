use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A discrete point on a day's display axis.
///
/// Slots are derived from the selected date and the axis configuration and are
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

impl TimeSlot {
    /// Time of day of this slot. Hours and minutes are validated by the axis
    /// generator, so the fallback to midnight is unreachable for generated slots.
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
    pub label: String,
    pub starts_at: NaiveDateTime,
}

impl From<TimeSlot> for TimeSlotResponse {
    fn from(slot: TimeSlot) -> Self {
        Self {
            label: slot.to_string(),
            starts_at: slot.starts_at(),
        }
    }
}

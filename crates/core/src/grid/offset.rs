//! Interval to slot-offset mapping.
//!
//! Offsets are measured in slots from the axis origin and are left unrounded:
//! an interval that does not align to the slot length yields fractional values.
//! Only the time of day of each endpoint is used. Callers must pass single-day
//! intervals that do not cross midnight.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::errors::GridError;

/// Vertical position of an interval on the axis, in slot units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSpan {
    pub offset_slots: f64,
    pub height_slots: f64,
}

impl SlotSpan {
    pub fn end_slots(&self) -> f64 {
        self.offset_slots + self.height_slots
    }

    pub fn to_pixels(&self, px_per_slot: f64) -> PixelSpan {
        PixelSpan {
            top: self.offset_slots * px_per_slot,
            height: self.height_slots * px_per_slot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelSpan {
    pub top: f64,
    pub height: f64,
}

/// Maps `[start, end)` onto the axis that begins at `day_start`.
///
/// # Errors
///
/// - [`GridError::InvalidConfiguration`] for a zero slot length.
/// - [`GridError::InvalidInterval`] when `end <= start`, either as given or
///   once both endpoints are moved onto the display date.
pub fn map_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    day_start: NaiveDateTime,
    interval_minutes: u32,
) -> Result<SlotSpan, GridError> {
    if interval_minutes == 0 {
        return Err(GridError::InvalidConfiguration(
            "slot interval must be at least one minute".to_string(),
        ));
    }
    if end <= start {
        return Err(GridError::InvalidInterval { start, end });
    }

    let display_date = day_start.date();
    let normalized_start = display_date.and_time(start.time());
    let normalized_end = display_date.and_time(end.time());
    if normalized_end <= normalized_start {
        return Err(GridError::InvalidInterval { start, end });
    }

    let slot_seconds = f64::from(interval_minutes) * 60.0;
    let offset = seconds(normalized_start - day_start) / slot_seconds;
    let height = seconds(normalized_end - normalized_start) / slot_seconds;

    Ok(SlotSpan {
        offset_slots: offset,
        height_slots: height,
    })
}

/// Exact length in seconds, sub-second part included.
fn seconds(delta: Duration) -> f64 {
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

/// Inverse of [`map_interval`] for a single boundary, rounded to the millisecond.
pub fn slot_offset_to_time(
    day_start: NaiveDateTime,
    offset_slots: f64,
    interval_minutes: u32,
) -> NaiveDateTime {
    let millis = (offset_slots * f64::from(interval_minutes) * 60_000.0).round() as i64;
    day_start + Duration::milliseconds(millis)
}

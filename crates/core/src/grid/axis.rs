use std::iter::FusedIterator;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    errors::GridError,
    models::{grid::AxisConfig, time_slot::TimeSlot},
};

impl AxisConfig {
    /// Checks that the configuration describes a non-empty axis within one day.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.interval_minutes == 0 || 60 % self.interval_minutes != 0 {
            return Err(GridError::InvalidConfiguration(format!(
                "slot interval of {} minutes does not evenly divide an hour",
                self.interval_minutes
            )));
        }
        if self.end_hour < self.start_hour {
            return Err(GridError::InvalidConfiguration(format!(
                "end hour {} precedes start hour {}",
                self.end_hour, self.start_hour
            )));
        }
        if self.end_hour > 23 {
            return Err(GridError::InvalidConfiguration(format!(
                "end hour {} is not a valid hour of the day",
                self.end_hour
            )));
        }
        Ok(())
    }

    /// Number of slots on the axis, end boundary included. Only meaningful
    /// once [`AxisConfig::validate`] has passed.
    pub(crate) fn slot_count(&self) -> usize {
        ((self.end_hour - self.start_hour) * 60 / self.interval_minutes) as usize + 1
    }

    /// The axis origin (`start_hour:00`) on the given date.
    pub fn day_start(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(self.start_hour))
    }
}

/// A validated day axis. Iterate it with [`TimeAxis::iter`] as many times as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    date: NaiveDate,
    config: AxisConfig,
}

impl TimeAxis {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn day_start(&self) -> NaiveDateTime {
        self.config.day_start(self.date)
    }

    pub fn len(&self) -> usize {
        self.config.slot_count()
    }

    /// Always false: a valid axis holds at least its start slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn slot(&self, index: usize) -> Option<TimeSlot> {
        (index < self.len()).then(|| slot_at(self.date, &self.config, index))
    }

    pub fn iter(&self) -> Slots {
        Slots {
            date: self.date,
            config: self.config,
            front: 0,
            back: self.len(),
        }
    }
}

impl IntoIterator for &TimeAxis {
    type Item = TimeSlot;
    type IntoIter = Slots;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the slots of a [`TimeAxis`].
#[derive(Debug, Clone)]
pub struct Slots {
    date: NaiveDate,
    config: AxisConfig,
    front: usize,
    back: usize,
}

impl Iterator for Slots {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        if self.front >= self.back {
            return None;
        }
        let slot = slot_at(self.date, &self.config, self.front);
        self.front += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Slots {
    fn next_back(&mut self) -> Option<TimeSlot> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(slot_at(self.date, &self.config, self.back))
    }
}

impl ExactSizeIterator for Slots {}

impl FusedIterator for Slots {}

fn slot_at(date: NaiveDate, config: &AxisConfig, index: usize) -> TimeSlot {
    let minutes = config.start_hour * 60 + index as u32 * config.interval_minutes;
    TimeSlot {
        date,
        hour: minutes / 60,
        minute: minutes % 60,
    }
}

/// Builds the slot axis for `date`.
///
/// The axis runs from `start_hour:00` to `end_hour:00` inclusive, one slot
/// every `interval_minutes`, so it holds `((end - start) * 60 / interval) + 1`
/// slots.
///
/// # Errors
///
/// [`GridError::InvalidConfiguration`] when the interval does not evenly divide
/// 60, the end hour precedes the start hour, or the end hour is past 23.
pub fn generate_time_axis(date: NaiveDate, config: &AxisConfig) -> Result<TimeAxis, GridError> {
    config.validate()?;
    Ok(TimeAxis {
        date,
        config: *config,
    })
}

pub mod appointment;
pub mod blocked_time;
pub mod technician;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Half-open `[00:00, next day 00:00)` bounds of a calendar date.
pub(crate) fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::models::{appointment::Appointment, blocked_time::BlockedTime, grid::TechnicianScope};

/// Anything placed on a technician's column.
pub trait GridEntity {
    fn id(&self) -> Uuid;
    fn technician_id(&self) -> Uuid;
    fn starts_at(&self) -> NaiveDateTime;
    fn ends_at(&self) -> NaiveDateTime;

    /// Same-day match against the selected date.
    fn occurs_on(&self, date: NaiveDate) -> bool {
        self.starts_at().date() == date
    }
}

impl GridEntity for Appointment {
    fn id(&self) -> Uuid {
        self.id
    }

    fn technician_id(&self) -> Uuid {
        self.technician_id
    }

    fn starts_at(&self) -> NaiveDateTime {
        self.appointment_start
    }

    fn ends_at(&self) -> NaiveDateTime {
        self.appointment_end
    }
}

impl GridEntity for BlockedTime {
    fn id(&self) -> Uuid {
        self.id
    }

    fn technician_id(&self) -> Uuid {
        self.technician_id
    }

    fn starts_at(&self) -> NaiveDateTime {
        self.start_time
    }

    fn ends_at(&self) -> NaiveDateTime {
        self.end_time
    }

    fn occurs_on(&self, date: NaiveDate) -> bool {
        let first_day = self.start_time.date();
        if self.is_recurring {
            first_day <= date
        } else {
            first_day == date
        }
    }
}

fn select<'a, T: GridEntity + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    selected_date: NaiveDate,
    scope: TechnicianScope,
) -> Vec<&'a T> {
    items
        .into_iter()
        .filter(|item| item.occurs_on(selected_date) && scope.includes(item.technician_id()))
        .collect()
}

/// Appointments starting on `selected_date` for technicians in `scope`, in input order.
pub fn select_appointments<'a>(
    appointments: impl IntoIterator<Item = &'a Appointment>,
    selected_date: NaiveDate,
    scope: TechnicianScope,
) -> Vec<&'a Appointment> {
    select(appointments, selected_date, scope)
}

/// Blocked times shown on `selected_date` for technicians in `scope`, in input order.
///
/// Returns nothing when `hide_blocked` is set.
pub fn select_blocked_times<'a>(
    blocked_times: impl IntoIterator<Item = &'a BlockedTime>,
    selected_date: NaiveDate,
    scope: TechnicianScope,
    hide_blocked: bool,
) -> Vec<&'a BlockedTime> {
    if hide_blocked {
        return Vec::new();
    }
    select(blocked_times, selected_date, scope)
}

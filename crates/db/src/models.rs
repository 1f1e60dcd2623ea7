use chairside_core::models::{
    appointment::{Appointment, AppointmentStatus, DEFAULT_APPOINTMENT_MINUTES},
    blocked_time::BlockedTime,
    technician::Technician,
};
use chrono::{Duration, NaiveDateTime};
use eyre::{eyre, Report};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTechnician {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub appointment_start: NaiveDateTime,
    pub appointment_end: Option<NaiveDateTime>,
    pub status: String,
    pub client_name: String,
    pub service_name: String,
    pub phone_number: Option<String>,
    pub order_number: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBlockedTime {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub reason: Option<String>,
    pub is_recurring: bool,
}

impl From<DbTechnician> for Technician {
    fn from(row: DbTechnician) -> Self {
        Technician {
            id: row.id,
            name: row.name,
            avatar_url: row.avatar_url,
            color: row.color,
        }
    }
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = Report;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|e| eyre!("appointment {}: {}", row.id, e))?;
        // Rows booked without an explicit end get the default service length.
        let appointment_end = row.appointment_end.unwrap_or_else(|| {
            row.appointment_start + Duration::minutes(DEFAULT_APPOINTMENT_MINUTES)
        });

        Ok(Appointment {
            id: row.id,
            technician_id: row.technician_id,
            appointment_start: row.appointment_start,
            appointment_end,
            status,
            client_name: row.client_name,
            service_name: row.service_name,
            phone_number: row.phone_number,
            order_number: row.order_number,
            is_favorite: row.is_favorite,
        })
    }
}

impl From<DbBlockedTime> for BlockedTime {
    fn from(row: DbBlockedTime) -> Self {
        BlockedTime {
            id: row.id,
            technician_id: row.technician_id,
            start_time: row.start_time,
            end_time: row.end_time,
            reason: row.reason,
            is_recurring: row.is_recurring,
        }
    }
}

//! The data source the grid is computed from.

use async_trait::async_trait;
use chairside_core::models::{
    appointment::Appointment, blocked_time::BlockedTime, technician::Technician,
};
use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use uuid::Uuid;

use crate::{repositories, DbPool};

/// Read access to the salon's technicians and their day's bookings.
#[async_trait]
pub trait SalonStore: Send + Sync {
    /// All technicians, ordered by name.
    async fn list_technicians(&self) -> Result<Vec<Technician>>;

    async fn get_technician(&self, id: Uuid) -> Result<Option<Technician>>;

    /// Appointments starting on `date`, ordered by start.
    async fn list_appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

    /// Blocked times shown on `date`, recurring ones included.
    async fn list_blocked_times_on(&self, date: NaiveDate) -> Result<Vec<BlockedTime>>;
}

pub struct PgSalonStore {
    pool: DbPool,
}

impl PgSalonStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalonStore for PgSalonStore {
    async fn list_technicians(&self) -> Result<Vec<Technician>> {
        let rows = repositories::technician::list_technicians(&self.pool).await?;
        Ok(rows.into_iter().map(Technician::from).collect())
    }

    async fn get_technician(&self, id: Uuid) -> Result<Option<Technician>> {
        let row = repositories::technician::get_technician_by_id(&self.pool, id).await?;
        Ok(row.map(Technician::from))
    }

    async fn list_appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let rows = repositories::appointment::list_appointments_on(&self.pool, date).await?;
        rows.into_iter()
            .map(Appointment::try_from)
            .collect::<Result<Vec<_>>>()
            .wrap_err_with(|| format!("Failed to load appointments for {}", date))
    }

    async fn list_blocked_times_on(&self, date: NaiveDate) -> Result<Vec<BlockedTime>> {
        let rows = repositories::blocked_time::list_blocked_times_on(&self.pool, date).await?;
        Ok(rows.into_iter().map(BlockedTime::from).collect())
    }
}

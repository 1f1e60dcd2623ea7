use crate::models::DbAppointment;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

use super::day_bounds;

pub async fn list_appointments_on(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let (day_start, next_day) = day_bounds(date);
    tracing::debug!("Listing appointments on {}", date);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, technician_id, appointment_start, appointment_end, status,
               client_name, service_name, phone_number, order_number, is_favorite
        FROM appointments
        WHERE appointment_start >= $1 AND appointment_start < $2
        ORDER BY appointment_start ASC
        "#,
    )
    .bind(day_start)
    .bind(next_day)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

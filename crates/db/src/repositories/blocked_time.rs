use crate::models::DbBlockedTime;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

use super::day_bounds;

/// Blocked times starting on `date`, plus recurring ones that started on or before it.
pub async fn list_blocked_times_on(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbBlockedTime>> {
    let (day_start, next_day) = day_bounds(date);
    tracing::debug!("Listing blocked times on {}", date);

    let blocked_times = sqlx::query_as::<_, DbBlockedTime>(
        r#"
        SELECT id, technician_id, start_time, end_time, reason, is_recurring
        FROM blocked_times
        WHERE (start_time >= $1 AND start_time < $2)
           OR (is_recurring AND start_time < $2)
        ORDER BY start_time ASC
        "#,
    )
    .bind(day_start)
    .bind(next_day)
    .fetch_all(pool)
    .await?;

    Ok(blocked_times)
}

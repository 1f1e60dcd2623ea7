use crate::models::DbTechnician;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_technicians(pool: &Pool<Postgres>) -> Result<Vec<DbTechnician>> {
    tracing::debug!("Listing technicians");

    let technicians = sqlx::query_as::<_, DbTechnician>(
        r#"
        SELECT id, name, avatar_url, color
        FROM technicians
        ORDER BY name ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(technicians)
}

pub async fn get_technician_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTechnician>> {
    tracing::debug!("Getting technician by id: {}", id);

    let technician = sqlx::query_as::<_, DbTechnician>(
        r#"
        SELECT id, name, avatar_url, color
        FROM technicians
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(technician)
}

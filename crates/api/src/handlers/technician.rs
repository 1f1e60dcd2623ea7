use axum::{extract::State, Json};
use chairside_core::{errors::SalonError, models::technician::Technician};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_technicians(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Technician>>, AppError> {
    let technicians = state
        .store
        .list_technicians()
        .await
        .map_err(SalonError::Database)?;

    Ok(Json(technicians))
}

//! # Scheduling Grid Handlers
//!
//! Loads a day's snapshot from the store and runs the grid engine over it.
//! Every request works on its own snapshot; nothing is cached between calls.
//!
//! Layout results borrow from the loaded snapshot, so responses are serialized
//! inside the handler instead of being returned as owned `Json<T>` values.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chairside_core::{
    errors::SalonError,
    grid::{generate_time_axis, layout_column, layout_grid, ColumnLayout, TechnicianColumn},
    models::{
        appointment::{AppointmentStatus, StatusStyle, BLOCKED_TIME_STYLE},
        grid::{GridFilters, TechnicianScope},
        technician::Technician,
        time_slot::TimeSlotResponse,
    },
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct AxisQuery {
    pub date: NaiveDate,
}

/// Query parameters for the full grid endpoint
///
/// * `date` - Calendar date to lay out (`YYYY-MM-DD`)
/// * `technician` - `all` (default) or one technician id
/// * `hideBlocked` - Leave blocked times out of every column (default: false)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridQuery {
    pub date: NaiveDate,
    #[serde(default)]
    pub technician: TechnicianScope,
    #[serde(default)]
    pub hide_blocked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnQuery {
    pub date: NaiveDate,
    #[serde(default)]
    pub hide_blocked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisResponse {
    pub date: NaiveDate,
    pub interval_minutes: u32,
    pub slots: Vec<TimeSlotResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse<'a> {
    #[serde(flatten)]
    pub axis: AxisResponse,
    pub columns: Vec<TechnicianColumn<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnResponse<'a> {
    pub date: NaiveDate,
    pub technician: &'a Technician,
    #[serde(flatten)]
    pub layout: ColumnLayout<'a>,
}

#[derive(Debug, Serialize)]
pub struct LegendEntry {
    pub status: AppointmentStatus,
    #[serde(flatten)]
    pub style: StatusStyle,
}

#[derive(Debug, Serialize)]
pub struct LegendResponse {
    pub statuses: Vec<LegendEntry>,
    pub blocked: StatusStyle,
}

fn axis_response(state: &ApiState, date: NaiveDate) -> Result<AxisResponse, AppError> {
    let axis = generate_time_axis(date, &state.axis)?;

    Ok(AxisResponse {
        date,
        interval_minutes: axis.config().interval_minutes,
        slots: axis.iter().map(TimeSlotResponse::from).collect(),
    })
}

/// Returns the slot axis for a date.
///
/// ```text
/// GET /api/grid/axis?date=2024-01-01
/// ```
#[axum::debug_handler]
pub async fn get_time_axis(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AxisQuery>,
) -> Result<Json<AxisResponse>, AppError> {
    Ok(Json(axis_response(&state, query.date)?))
}

/// Lays out every technician column in scope for a date.
///
/// ```text
/// GET /api/grid?date=2024-01-01&technician=all&hideBlocked=false
/// ```
///
/// # Errors
///
/// * `SalonError::NotFound` - `technician` names an unknown technician
/// * `SalonError::Database` - The store could not be read
#[axum::debug_handler]
pub async fn get_grid(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<GridQuery>,
) -> Result<Response, AppError> {
    debug!(
        date = %query.date,
        technician = %query.technician,
        hide_blocked = query.hide_blocked,
        "Computing grid layout"
    );
    let axis = axis_response(&state, query.date)?;

    let (technicians, appointments, blocked_times) = tokio::try_join!(
        state.store.list_technicians(),
        state.store.list_appointments_on(query.date),
        state.store.list_blocked_times_on(query.date),
    )
    .map_err(SalonError::Database)?;

    if let TechnicianScope::Technician(id) = query.technician {
        if !technicians.iter().any(|technician| technician.id == id) {
            return Err(SalonError::NotFound(format!("Technician with ID {} not found", id)).into());
        }
    }

    let filters = GridFilters {
        selected_date: query.date,
        technician_scope: query.technician,
        hide_blocked_times: query.hide_blocked,
    };
    let columns = layout_grid(
        &technicians,
        &appointments,
        &blocked_times,
        &filters,
        &state.axis,
    )?;

    Ok(Json(GridResponse { axis, columns }).into_response())
}

/// Lays out a single technician's column for a date.
///
/// ```text
/// GET /api/grid/columns/:technician_id?date=2024-01-01&hideBlocked=true
/// ```
#[axum::debug_handler]
pub async fn get_column(
    State(state): State<Arc<ApiState>>,
    Path(technician_id): Path<Uuid>,
    Query(query): Query<ColumnQuery>,
) -> Result<Response, AppError> {
    let technician = state
        .store
        .get_technician(technician_id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| {
            SalonError::NotFound(format!("Technician with ID {} not found", technician_id))
        })?;

    let (appointments, blocked_times) = tokio::try_join!(
        state.store.list_appointments_on(query.date),
        state.store.list_blocked_times_on(query.date),
    )
    .map_err(SalonError::Database)?;

    let filters = GridFilters {
        selected_date: query.date,
        technician_scope: TechnicianScope::Technician(technician_id),
        hide_blocked_times: query.hide_blocked,
    };
    let layout = layout_column(
        technician_id,
        &appointments,
        &blocked_times,
        &filters,
        &state.axis,
    )?;

    Ok(Json(ColumnResponse {
        date: query.date,
        technician: &technician,
        layout,
    })
    .into_response())
}

/// Status colours used by the grid.
pub async fn get_legend() -> Json<LegendResponse> {
    Json(LegendResponse {
        statuses: AppointmentStatus::ALL
            .into_iter()
            .map(|status| LegendEntry {
                status,
                style: status.style(),
            })
            .collect(),
        blocked: BLOCKED_TIME_STYLE,
    })
}

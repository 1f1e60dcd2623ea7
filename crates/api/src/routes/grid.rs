use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/grid", get(handlers::grid::get_grid))
        .route("/api/grid/axis", get(handlers::grid::get_time_axis))
        .route("/api/grid/legend", get(handlers::grid::get_legend))
        .route(
            "/api/grid/columns/:technician_id",
            get(handlers::grid::get_column),
        )
}

//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chairside_core::errors::{GridError, SalonError};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use chairside_api::middleware::error_handling::AppError;
/// use chairside_core::errors::SalonError;
///
/// async fn handler(name: Option<String>) -> Result<Json<String>, AppError> {
///     let name = name.ok_or_else(|| SalonError::NotFound("technician".to_string()))?;
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SalonError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SalonError::NotFound(_) => StatusCode::NOT_FOUND,
            SalonError::Validation(_) => StatusCode::BAD_REQUEST,
            SalonError::Grid(GridError::InvalidInterval { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            SalonError::Grid(GridError::InvalidConfiguration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            SalonError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SalonError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self.0, "Request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<SalonError> for AppError {
    fn from(err: SalonError) -> Self {
        AppError(err)
    }
}

impl From<GridError> for AppError {
    fn from(err: GridError) -> Self {
        AppError(SalonError::Grid(err))
    }
}

/// Wraps store failures in `SalonError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SalonError::Database(err))
    }
}

/// Maps a SalonError to an HTTP response
pub fn map_error(err: SalonError) -> Response {
    AppError(err).into_response()
}

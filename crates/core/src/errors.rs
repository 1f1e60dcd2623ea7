use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures raised by the scheduling grid engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// The axis cannot be built from the given hours/interval. Not recoverable by retry.
    #[error("Invalid grid configuration: {0}")]
    InvalidConfiguration(String),

    /// An interval whose end does not come after its start on the display day.
    #[error("Invalid interval: {start} -> {end} does not end after it starts on the same day")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Error, Debug)]
pub enum SalonError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type SalonResult<T> = Result<T, SalonError>;

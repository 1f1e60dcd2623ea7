//! # Chairside API
//!
//! HTTP surface of the salon scheduling grid. Each request loads the selected
//! day from a [`SalonStore`] and runs the grid engine from `chairside-core`
//! over that snapshot.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Load data and run the grid engine
//! - **Middleware**: Error mapping
//! - **Config**: Environment and grid configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use chairside_core::models::grid::AxisConfig;
use chairside_db::store::SalonStore;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Source of technicians, appointments and blocked times
    pub store: Arc<dyn SalonStore>,
    /// Shape of the grid's day axis
    pub axis: AxisConfig,
}

/// Builds the application router with all routes attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Technician listing
        .merge(routes::technician::routes())
        // Scheduling grid endpoints
        .merge(routes::grid::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and store
///
/// Initializes logging, configures routes and middleware, and serves until
/// the listener fails.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn SalonStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        store,
        axis: config.axis,
    });
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (grid {:02}:00-{:02}:00, {} min slots)",
        addr, config.axis.start_hour, config.axis.end_hour, config.axis.interval_minutes
    );
    axum::serve(listener, app).await?;

    Ok(())
}

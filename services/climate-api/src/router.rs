//! Route table.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the application router around shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Route index
        .route("/", get(handlers::index::index_handler))
        // Data routes
        .route(
            "/api/v1.0/precipitation",
            get(handlers::precipitation::precipitation_handler),
        )
        .route("/api/v1.0/stations", get(handlers::stations::stations_handler))
        .route("/api/v1.0/tobs", get(handlers::tobs::tobs_handler))
        .route("/api/v1.0/:start", get(handlers::temperature::start_handler))
        .route(
            "/api/v1.0/:start/:end",
            get(handlers::temperature::start_end_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .fallback(handlers::index::not_found_handler)
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

//! Route index handler.

use axum::{
    http::{header, Uri},
    response::IntoResponse,
};
use climate_protocol::{media_types, ApiError, RouteIndex};

use crate::error::HandlerError;

/// GET / - List available routes
pub async fn index_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, media_types::HTML)],
        RouteIndex::v1().to_html(),
    )
}

/// Fallback for paths outside the route table.
pub async fn not_found_handler(uri: Uri) -> HandlerError {
    HandlerError::new(
        "not_found",
        ApiError::NotFound(format!("No route for {}", uri.path())),
    )
    .at(uri.path())
}

//! Station listing handler.

use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::error::HandlerError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

const ENDPOINT: &str = "stations";

/// GET /api/v1.0/stations - All station identifiers
pub async fn stations_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<String>>, HandlerError> {
    let _timer = RequestTimer::start(ENDPOINT);

    let stations = state
        .store
        .station_ids()
        .await
        .map_err(|e| HandlerError::new(ENDPOINT, e))?;

    Ok(Json(stations))
}

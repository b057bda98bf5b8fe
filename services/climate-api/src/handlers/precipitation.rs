//! Precipitation handler.
//!
//! Returns the last twelve months of precipitation as a `date -> prcp`
//! object. The window ends at the latest date in the dataset rather than
//! today, since the archive is historical.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use tracing::debug;

use climate_common::{one_year_before, ClimateResult};
use climate_protocol::{precipitation_map, PrecipitationMap};
use storage::ClimateStore;

use crate::error::HandlerError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

const ENDPOINT: &str = "precipitation";

/// GET /api/v1.0/precipitation - Precipitation for the last year of data
pub async fn precipitation_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<PrecipitationMap>, HandlerError> {
    let _timer = RequestTimer::start(ENDPOINT);

    let map = load_precipitation(&state.store)
        .await
        .map_err(|e| HandlerError::new(ENDPOINT, e))?;

    Ok(Json(map))
}

/// Precipitation keyed by date over the year ending at the latest observation.
///
/// An empty table yields an empty map.
pub async fn load_precipitation(store: &ClimateStore) -> ClimateResult<PrecipitationMap> {
    let Some(latest) = store.latest_date().await? else {
        debug!("No measurements; returning empty precipitation map");
        return Ok(PrecipitationMap::new());
    };

    let rows = store.precipitation_since(one_year_before(latest)).await?;
    Ok(precipitation_map(
        rows.into_iter().map(|row| (row.date, row.prcp)),
    ))
}

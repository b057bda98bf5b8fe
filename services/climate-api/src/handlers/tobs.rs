//! Temperature observations handler.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use tracing::debug;

use climate_common::{one_year_before, ClimateResult};
use climate_protocol::TobsEntry;
use storage::ClimateStore;

use crate::error::HandlerError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

const ENDPOINT: &str = "tobs";

/// GET /api/v1.0/tobs - Last year of observations at the most active station
pub async fn tobs_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<TobsEntry>>, HandlerError> {
    let _timer = RequestTimer::start(ENDPOINT);

    let entries = load_tobs(&state.store)
        .await
        .map_err(|e| HandlerError::new(ENDPOINT, e))?;

    Ok(Json(entries))
}

/// Observations for the station with the most measurements.
///
/// The window is anchored on the latest date across all stations, not the
/// chosen station's own latest reading.
pub async fn load_tobs(store: &ClimateStore) -> ClimateResult<Vec<TobsEntry>> {
    let Some(latest) = store.latest_date().await? else {
        return Ok(Vec::new());
    };
    let Some(active) = store.most_active_station().await? else {
        return Ok(Vec::new());
    };

    let cutoff = one_year_before(latest);
    debug!(station = %active.station_id, cutoff = %cutoff, "Loading temperature observations");

    let observations = store
        .temperature_observations(&active.station_id, cutoff)
        .await?;

    Ok(observations
        .into_iter()
        .map(|obs| TobsEntry::new(obs.date, obs.tobs))
        .collect())
}

//! Temperature summary handlers for `/api/v1.0/<start>` and
//! `/api/v1.0/<start>/<end>`.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::Uri,
    Json,
};
use tracing::instrument;

use climate_common::{ClimateResult, DateRange};
use climate_protocol::TemperatureStats;
use storage::ClimateStore;

use crate::error::HandlerError;
use crate::metrics::RequestTimer;
use crate::state::AppState;

const ENDPOINT: &str = "temperature";

/// GET /api/v1.0/:start - TMIN/TAVG/TMAX for dates on or after `start`
#[instrument(skip(state, uri))]
pub async fn start_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(start): Path<String>,
    uri: Uri,
) -> Result<Json<Vec<TemperatureStats>>, HandlerError> {
    temperature_query(&state, &start, None)
        .await
        .map_err(|e| e.at(uri.path()))
}

/// GET /api/v1.0/:start/:end - TMIN/TAVG/TMAX for `start..=end`
#[instrument(skip(state, uri))]
pub async fn start_end_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
    uri: Uri,
) -> Result<Json<Vec<TemperatureStats>>, HandlerError> {
    temperature_query(&state, &start, Some(&end))
        .await
        .map_err(|e| e.at(uri.path()))
}

async fn temperature_query(
    state: &AppState,
    start: &str,
    end: Option<&str>,
) -> Result<Json<Vec<TemperatureStats>>, HandlerError> {
    let _timer = RequestTimer::start(ENDPOINT);

    let range = DateRange::parse(start, end).map_err(|e| HandlerError::new(ENDPOINT, e))?;
    let stats = load_temperature_stats(&state.store, &range)
        .await
        .map_err(|e| HandlerError::new(ENDPOINT, e))?;

    Ok(Json(stats))
}

/// Aggregate temperatures over `range`.
///
/// Always a single-element list; the element holds nulls when the range
/// matched no observations.
pub async fn load_temperature_stats(
    store: &ClimateStore,
    range: &DateRange,
) -> ClimateResult<Vec<TemperatureStats>> {
    let summary = store.temperature_summary(range).await?;
    Ok(vec![TemperatureStats::from_aggregates(
        summary.tmin,
        summary.tavg,
        summary.tmax,
    )])
}

//! Response types for the climate observations API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Precipitation readings keyed by observation date.
///
/// Keys serialize in date order since the dates are zero-padded ISO strings.
pub type PrecipitationMap = BTreeMap<String, Option<f64>>;

/// Fold `(date, prcp)` rows into a [`PrecipitationMap`].
///
/// Several stations report on the same day; the row seen last wins.
pub fn precipitation_map<I>(rows: I) -> PrecipitationMap
where
    I: IntoIterator<Item = (String, Option<f64>)>,
{
    let mut map = PrecipitationMap::new();
    for (date, prcp) in rows {
        map.insert(date, prcp);
    }
    map
}

/// Minimum, average and maximum temperature over a date range.
///
/// All three are `None` when no observation fell inside the range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,

    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,

    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureStats {
    pub fn from_aggregates(tmin: Option<f64>, tavg: Option<f64>, tmax: Option<f64>) -> Self {
        Self { tmin, tavg, tmax }
    }

    /// True when the range contained no observations.
    pub fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }

    /// Check `TMIN <= TAVG <= TMAX`.
    ///
    /// An empty result is trivially ordered; a partially populated one is not.
    pub fn is_ordered(&self) -> bool {
        match (self.tmin, self.tavg, self.tmax) {
            (Some(min), Some(avg), Some(max)) => min <= avg && avg <= max,
            (None, None, None) => true,
            _ => false,
        }
    }
}

/// One temperature observation for the most active station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TobsEntry {
    pub date: String,
    pub tobs: f64,
}

impl TobsEntry {
    pub fn new(date: impl Into<String>, tobs: f64) -> Self {
        Self {
            date: date.into(),
            tobs,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadyResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Exception response for errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExceptionResponse {
    /// Exception type identifier.
    #[serde(rename = "type")]
    pub type_: String,

    /// Human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Detailed error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Path of the request that caused the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ExceptionResponse {
    pub fn new(type_: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            title: None,
            status: Some(status),
            detail: Some(detail.into()),
            instance: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Create a 400 Bad Request exception.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("urn:climate-api:error:invalid-parameter", 400, detail).with_title("Bad Request")
    }

    /// Create a 404 Not Found exception.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("urn:climate-api:error:not-found", 404, detail).with_title("Not Found")
    }

    /// Create a 500 Internal Server Error exception.
    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new("urn:climate-api:error:server-error", 500, detail)
            .with_title("Internal Server Error")
    }
}

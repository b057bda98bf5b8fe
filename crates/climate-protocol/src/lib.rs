//! Climate Observations API Protocol
//!
//! JSON response shapes and error mapping shared by the climate API
//! service and its tests.
//!
//! # Example
//!
//! ```rust
//! use climate_protocol::{RouteIndex, TemperatureStats};
//!
//! let index = RouteIndex::v1();
//! assert!(index.to_html().contains("/api/v1.0/stations"));
//!
//! let stats = TemperatureStats::from_aggregates(Some(56.0), Some(71.5), Some(87.0));
//! assert!(stats.is_ordered());
//! ```

pub mod errors;
pub mod responses;
pub mod routes;

pub use errors::ApiError;
pub use responses::{
    precipitation_map, ExceptionResponse, HealthResponse, PrecipitationMap, ReadyResponse,
    TemperatureStats, TobsEntry,
};
pub use routes::{RouteEntry, RouteIndex};

/// API version path prefix.
pub const API_PREFIX: &str = "/api/v1.0";

/// Media types used in responses
pub mod media_types {
    /// JSON media type
    pub const JSON: &str = "application/json";
    /// HTML media type for the route index
    pub const HTML: &str = "text/html; charset=utf-8";
    /// Prometheus text exposition format
    pub const PROMETHEUS: &str = "text/plain; version=0.0.4";
}

//! Storage access for the climate services.
//!
//! Provides read-only queries over the SQLite climate database:
//! - `measurement`: daily precipitation and temperature per station
//! - `station`: station metadata

pub mod store;

pub use store::{
    ClimateStore, PrecipitationRow, Station, StationActivity, TemperatureObservation,
    TemperatureSummary,
};

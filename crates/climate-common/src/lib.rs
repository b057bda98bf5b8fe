//! Common types and utilities shared across the climate services.

pub mod error;
pub mod time;

pub use error::{ClimateError, ClimateResult};
pub use time::{one_year_before, DateRange, ObservationDate, TimeParseError};

//! Error types for the climate services.

use thiserror::Error;

use crate::time::TimeParseError;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for climate data operations.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Request Errors ===
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] TimeParseError),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    Database(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ClimateError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::InvalidDate(_) | ClimateError::InvalidRange(_) => 400,
            ClimateError::Database(_) | ClimateError::Internal(_) => 500,
        }
    }
}

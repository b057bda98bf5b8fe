//! API error types.

use thiserror::Error;

use climate_common::{ClimateError, TimeParseError};

use crate::responses::ExceptionResponse;

/// Errors returned to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path segment was not a valid date.
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] TimeParseError),

    /// Start and end dates do not form a valid range.
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data access error.
    #[error("Data access error: {0}")]
    DataAccessError(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidDate(_) => 400,
            ApiError::InvalidRange(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::DataAccessError(_) => 500,
            ApiError::InternalError(_) => 500,
        }
    }

    /// Convert to an ExceptionResponse.
    ///
    /// Server-side failures carry a generic detail; the underlying cause is
    /// only logged.
    pub fn to_exception(&self) -> ExceptionResponse {
        match self {
            ApiError::InvalidDate(e) => ExceptionResponse::bad_request(e.to_string()),
            ApiError::InvalidRange(msg) => ExceptionResponse::bad_request(msg),
            ApiError::NotFound(msg) => ExceptionResponse::not_found(msg),
            ApiError::DataAccessError(_) => {
                ExceptionResponse::internal_error("Failed to query climate data")
            }
            ApiError::InternalError(_) => ExceptionResponse::internal_error("Internal error"),
        }
    }
}

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        match err {
            ClimateError::InvalidDate(e) => ApiError::InvalidDate(e),
            ClimateError::InvalidRange(msg) => ApiError::InvalidRange(msg),
            ClimateError::Database(msg) => ApiError::DataAccessError(msg),
            ClimateError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let bad_date: ApiError = TimeParseError::InvalidFormat("2017-13-01".to_string()).into();
        assert_eq!(bad_date.status_code(), 400);
        assert_eq!(ApiError::InvalidRange("test".to_string()).status_code(), 400);
        assert_eq!(ApiError::NotFound("test".to_string()).status_code(), 404);
        assert_eq!(ApiError::DataAccessError("test".to_string()).status_code(), 500);
        assert_eq!(ApiError::InternalError("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_climate_error_conversion_keeps_status() {
        let errors = vec![
            ClimateError::InvalidDate(TimeParseError::InvalidFormat("x".to_string())),
            ClimateError::InvalidRange("x".to_string()),
            ClimateError::Database("x".to_string()),
            ClimateError::Internal("x".to_string()),
        ];

        for err in errors {
            let expected = err.http_status_code();
            let api: ApiError = err.into();
            assert_eq!(api.status_code(), expected);
        }
    }

    #[test]
    fn test_invalid_date_exception_names_input() {
        let err: ApiError = TimeParseError::InvalidFormat("tomorrow".to_string()).into();
        let exc = err.to_exception();

        assert_eq!(exc.status, Some(400));
        assert!(exc.detail.unwrap().contains("tomorrow"));
    }

    #[test]
    fn test_database_detail_not_exposed() {
        let err = ApiError::DataAccessError("no such table: measurement".to_string());
        let exc = err.to_exception();

        assert_eq!(exc.status, Some(500));
        assert!(!exc.detail.unwrap().contains("measurement"));
    }
}

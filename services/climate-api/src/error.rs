//! Conversion of API errors into HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use climate_protocol::{media_types, ApiError, ExceptionResponse};

use crate::metrics::record_query_error;

/// An [`ApiError`] raised while serving a named endpoint.
#[derive(Debug)]
pub struct HandlerError {
    endpoint: &'static str,
    error: ApiError,
    instance: Option<String>,
}

impl HandlerError {
    pub fn new(endpoint: &'static str, error: impl Into<ApiError>) -> Self {
        Self {
            endpoint,
            error: error.into(),
            instance: None,
        }
    }

    /// Record the request path reported as the exception `instance`.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.instance = Some(path.into());
        self
    }

    pub fn error(&self) -> &ApiError {
        &self.error
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(endpoint = self.endpoint, error = %self.error, "Request failed");
            record_query_error(self.endpoint);
        } else {
            debug!(endpoint = self.endpoint, error = %self.error, "Rejected request");
        }

        let mut exc = self.error.to_exception();
        if let Some(instance) = self.instance {
            exc = exc.with_instance(instance);
        }
        error_response(status, exc)
    }
}

/// Serialize an exception body with the given status.
pub fn error_response(status: StatusCode, exc: ExceptionResponse) -> Response {
    let json = serde_json::to_string(&exc).unwrap_or_default();
    (status, [(header::CONTENT_TYPE, media_types::JSON)], json).into_response()
}

//! Request metrics.

use std::time::Instant;

use anyhow::{Context, Result};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder.
///
/// Can only succeed once per process.
pub fn install_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// Times one request to a data endpoint.
pub struct RequestTimer {
    endpoint: &'static str,
    started: Instant,
}

impl RequestTimer {
    /// Count the request and start timing it.
    pub fn start(endpoint: &'static str) -> Self {
        counter!("climate_requests_total", "endpoint" => endpoint).increment(1);
        Self {
            endpoint,
            started: Instant::now(),
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        histogram!("climate_request_duration_seconds", "endpoint" => self.endpoint)
            .record(self.started.elapsed().as_secs_f64());
    }
}

/// Count a failed database query.
pub fn record_query_error(endpoint: &'static str) {
    counter!("climate_query_errors_total", "endpoint" => endpoint).increment(1);
}

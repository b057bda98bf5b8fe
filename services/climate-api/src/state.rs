//! Application state for the climate API.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use storage::ClimateStore;

use crate::config::ApiConfig;

/// Shared application state.
pub struct AppState {
    /// Read-only climate database.
    pub store: ClimateStore,

    /// Resolved configuration.
    pub config: ApiConfig,

    /// Prometheus recorder handle, when one is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Open the configured database.
    pub async fn new(config: ApiConfig) -> Result<Self> {
        let store = ClimateStore::connect(&config.database_url, config.max_connections)
            .await
            .with_context(|| format!("Failed to open climate database {}", config.database_url))?;

        info!(
            database = %config.database_url,
            max_connections = config.max_connections,
            "Connected to climate database"
        );

        Ok(Self {
            store,
            config,
            metrics: None,
        })
    }

    /// State around an existing store, with default config.
    pub fn with_store(store: ClimateStore) -> Self {
        Self {
            store,
            config: ApiConfig::default(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

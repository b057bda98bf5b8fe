//! Service configuration.

use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Default location of the Hawaii climate database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Resolved runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// SQLite database URL.
    pub database_url: String,

    /// Maximum pooled database connections.
    pub max_connections: u32,
}

impl ApiConfig {
    /// Build a config from raw command-line/environment values.
    pub fn new(listen: &str, database_url: impl Into<String>, max_connections: u32) -> Result<Self> {
        let listen_addr = listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", listen))?;

        anyhow::ensure!(max_connections > 0, "max_connections must be at least 1");

        Ok(Self {
            listen_addr,
            database_url: database_url.into(),
            max_connections,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

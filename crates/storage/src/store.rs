//! Climate observation queries over SQLite.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::debug;

use climate_common::{ClimateError, ClimateResult, DateRange, ObservationDate};

/// Database connection pool and climate queries.
#[derive(Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open an existing climate database read-only.
    pub async fn connect(database_url: &str, max_connections: u32) -> ClimateResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| ClimateError::Database(format!("Invalid database URL: {}", e)))?
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| ClimateError::Database(format!("Connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Wrap an already configured pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trip a trivial query to verify connectivity.
    pub async fn ping(&self) -> ClimateResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;
        Ok(())
    }

    /// Latest observation date in the measurement table.
    pub async fn latest_date(&self) -> ClimateResult<Option<ObservationDate>> {
        let latest = sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        latest
            .map(|raw| {
                ObservationDate::parse(&raw).map_err(|e| {
                    ClimateError::Database(format!("Malformed date in measurement table: {}", e))
                })
            })
            .transpose()
    }

    /// Precipitation readings strictly after `cutoff`, in storage order.
    pub async fn precipitation_since(
        &self,
        cutoff: ObservationDate,
    ) -> ClimateResult<Vec<PrecipitationRow>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement \
             WHERE date > ? \
             ORDER BY id",
        )
        .bind(cutoff.to_db_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        debug!(cutoff = %cutoff, rows = rows.len(), "Loaded precipitation rows");
        Ok(rows)
    }

    /// Station identifiers in table order.
    pub async fn station_ids(&self) -> ClimateResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT station FROM station WHERE station IS NOT NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)
    }

    /// Full station records in table order.
    pub async fn stations(&self) -> ClimateResult<Vec<Station>> {
        sqlx::query_as::<_, Station>(
            "SELECT station AS station_id, name, latitude, longitude, elevation \
             FROM station WHERE station IS NOT NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)
    }

    /// Station with the most measurements.
    ///
    /// Ties go to the lowest station identifier so repeated calls agree.
    pub async fn most_active_station(&self) -> ClimateResult<Option<StationActivity>> {
        let row = sqlx::query_as::<_, StationActivity>(
            "SELECT station AS station_id, COUNT(*) AS observations FROM measurement \
             WHERE station IS NOT NULL \
             GROUP BY station \
             ORDER BY observations DESC, station ASC \
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        if let Some(activity) = &row {
            debug!(
                station = %activity.station_id,
                observations = activity.observations,
                "Resolved most active station"
            );
        }
        Ok(row)
    }

    /// Temperature observations for one station strictly after `cutoff`.
    pub async fn temperature_observations(
        &self,
        station_id: &str,
        cutoff: ObservationDate,
    ) -> ClimateResult<Vec<TemperatureObservation>> {
        sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, tobs FROM measurement \
             WHERE station = ? AND date > ? AND tobs IS NOT NULL \
             ORDER BY date, id",
        )
        .bind(station_id)
        .bind(cutoff.to_db_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)
    }

    /// Minimum, average and maximum temperature over an inclusive range.
    pub async fn temperature_summary(&self, range: &DateRange) -> ClimateResult<TemperatureSummary> {
        let query = match range.end {
            Some(end) => sqlx::query_as::<_, TemperatureSummary>(
                "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
                 FROM measurement WHERE date >= ? AND date <= ?",
            )
            .bind(range.start.to_db_string())
            .bind(end.to_db_string()),
            None => sqlx::query_as::<_, TemperatureSummary>(
                "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
                 FROM measurement WHERE date >= ?",
            )
            .bind(range.start.to_db_string()),
        };

        query.fetch_one(&self.pool).await.map_err(query_failed)
    }
}

fn query_failed(e: sqlx::Error) -> ClimateError {
    ClimateError::Database(format!("Query failed: {}", e))
}

/// A `(date, prcp)` pair from the measurement table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A weather station.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// Measurement count for one station.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct StationActivity {
    pub station_id: String,
    pub observations: i64,
}

/// A `(date, tobs)` pair from the measurement table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Aggregate temperatures; all `None` when no row matched.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

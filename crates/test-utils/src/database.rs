//! SQLite databases populated with the fixture dataset.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::fixtures::{MEASUREMENTS, STATIONS};

/// Schema of the reflected Hawaii climate database.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
);

CREATE TABLE IF NOT EXISTS station (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
)
"#;

/// Open an empty in-memory database.
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool
/// is pinned to a single connection that is never recycled.
pub async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new().filename(":memory:");

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Create the `measurement` and `station` tables.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_SQL.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }
    Ok(())
}

/// Insert the fixture stations and measurements.
pub async fn seed_fixtures(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (idx, station) in STATIONS.iter().enumerate() {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(idx as i64 + 1)
        .bind(station.station)
        .bind(station.name)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.elevation)
        .execute(pool)
        .await?;
    }

    for (idx, row) in MEASUREMENTS.iter().enumerate() {
        sqlx::query("INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)")
            .bind(idx as i64 + 1)
            .bind(row.station)
            .bind(row.date)
            .bind(row.prcp)
            .bind(row.tobs)
            .execute(pool)
            .await?;
    }

    Ok(())
}

/// In-memory database with the schema but no rows.
pub async fn empty_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = memory_pool().await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// In-memory database holding the full fixture dataset.
pub async fn seeded_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = empty_pool().await?;
    seed_fixtures(&pool).await?;
    Ok(pool)
}

/// Write the fixture dataset to a database file at `path`.
pub async fn write_fixture_database(path: &Path) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    seed_fixtures(&pool).await?;
    pool.close().await;
    Ok(())
}

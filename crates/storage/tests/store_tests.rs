//! Tests for ClimateStore queries against the fixture dataset.

use climate_common::{one_year_before, DateRange, ObservationDate};
use storage::ClimateStore;
use test_utils::{assert_approx_eq, empty_pool, expected, seeded_pool, stations};

async fn seeded_store() -> ClimateStore {
    ClimateStore::from_pool(seeded_pool().await.unwrap())
}

async fn empty_store() -> ClimateStore {
    ClimateStore::from_pool(empty_pool().await.unwrap())
}

fn date(s: &str) -> ObservationDate {
    ObservationDate::parse(s).unwrap()
}

// ============================================================================
// Latest date and lookback window
// ============================================================================

#[tokio::test]
async fn test_latest_date() {
    let store = seeded_store().await;
    let latest = store.latest_date().await.unwrap();
    assert_eq!(latest, Some(date(expected::LAST_DATE)));
}

#[tokio::test]
async fn test_latest_date_empty_table() {
    let store = empty_store().await;
    assert_eq!(store.latest_date().await.unwrap(), None);
}

#[tokio::test]
async fn test_precipitation_window_bounds() {
    let store = seeded_store().await;
    let cutoff = one_year_before(store.latest_date().await.unwrap().unwrap());
    assert_eq!(cutoff.to_db_string(), expected::WINDOW_CUTOFF);

    let rows = store.precipitation_since(cutoff).await.unwrap();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.date.as_str() > expected::WINDOW_CUTOFF));
    assert!(rows.iter().any(|r| r.prcp.is_none()));
}

#[tokio::test]
async fn test_window_excludes_cutoff_day() {
    let store = seeded_store().await;
    let cutoff = date(expected::WINDOW_CUTOFF);

    let rows = store.precipitation_since(cutoff).await.unwrap();
    assert!(!rows.iter().any(|r| r.date == expected::WINDOW_CUTOFF));

    // KANEOHE reported on the cutoff day itself.
    let obs = store
        .temperature_observations(stations::KANEOHE, cutoff)
        .await
        .unwrap();
    let dates: Vec<&str> = obs.iter().map(|o| o.date.as_str()).collect();
    assert_eq!(dates, vec!["2017-01-01", "2017-06-15"]);
}

#[tokio::test]
async fn test_precipitation_storage_order() {
    let store = seeded_store().await;
    let rows = store.precipitation_since(date("2016-12-31")).await.unwrap();
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();

    // Insertion order, not date order.
    assert_eq!(
        dates,
        vec!["2017-01-01", "2017-08-23", "2017-01-01", "2017-06-15", "2017-01-01", "2017-06-15", "2017-08-18"]
    );
}

// ============================================================================
// Stations
// ============================================================================

#[tokio::test]
async fn test_station_ids() {
    let store = seeded_store().await;
    let ids = store.station_ids().await.unwrap();
    assert_eq!(ids, stations::ALL.to_vec());
}

#[tokio::test]
async fn test_station_records() {
    let store = seeded_store().await;
    let records = store.stations().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].station_id, stations::WAIHEE);
    assert_eq!(records[2].name.as_deref(), Some("WAIHEE 837.5, HI US"));
    assert_eq!(records[2].elevation, Some(32.9));
}

#[tokio::test]
async fn test_station_ids_empty() {
    let store = empty_store().await;
    assert!(store.station_ids().await.unwrap().is_empty());
}

// ============================================================================
// Most active station and temperature observations
// ============================================================================

#[tokio::test]
async fn test_most_active_station() {
    let store = seeded_store().await;
    let activity = store.most_active_station().await.unwrap().unwrap();

    assert_eq!(activity.station_id, expected::MOST_ACTIVE);
    assert_eq!(activity.observations, expected::MOST_ACTIVE_COUNT);
}

#[tokio::test]
async fn test_most_active_station_tie_breaks_on_id() {
    let pool = empty_pool().await.unwrap();
    for (station, day) in [("B", "2017-01-01"), ("A", "2017-01-02"), ("B", "2017-01-03"), ("A", "2017-01-04")] {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, NULL, 70.0)")
            .bind(station)
            .bind(day)
            .execute(&pool)
            .await
            .unwrap();
    }

    let store = ClimateStore::from_pool(pool);
    let activity = store.most_active_station().await.unwrap().unwrap();
    assert_eq!(activity.station_id, "A");
    assert_eq!(activity.observations, 2);
}

#[tokio::test]
async fn test_most_active_station_empty() {
    let store = empty_store().await;
    assert!(store.most_active_station().await.unwrap().is_none());
}

#[tokio::test]
async fn test_temperature_observations() {
    let store = seeded_store().await;
    let obs = store
        .temperature_observations(expected::MOST_ACTIVE, date(expected::WINDOW_CUTOFF))
        .await
        .unwrap();

    let pairs: Vec<(&str, f64)> = obs.iter().map(|o| (o.date.as_str(), o.tobs)).collect();
    assert_eq!(pairs, expected::TOBS.to_vec());
}

#[tokio::test]
async fn test_temperature_observations_unknown_station() {
    let store = seeded_store().await;
    let obs = store
        .temperature_observations("USC00000000", date("2000-01-01"))
        .await
        .unwrap();
    assert!(obs.is_empty());
}

// ============================================================================
// Temperature summaries
// ============================================================================

#[tokio::test]
async fn test_summary_open_range() {
    let store = seeded_store().await;
    let summary = store
        .temperature_summary(&DateRange::since(date("2017-01-01")))
        .await
        .unwrap();

    let (tmin, tavg, tmax) = expected::STATS_SINCE_2017;
    assert_eq!(summary.tmin, Some(tmin));
    assert_approx_eq!(summary.tavg.unwrap(), tavg, 1e-9);
    assert_eq!(summary.tmax, Some(tmax));
}

#[tokio::test]
async fn test_summary_single_day_inclusive() {
    let store = seeded_store().await;
    let range = DateRange::parse("2017-01-01", Some("2017-01-01")).unwrap();
    let summary = store.temperature_summary(&range).await.unwrap();

    let (tmin, tavg, tmax) = expected::STATS_NEW_YEARS_DAY_2017;
    assert_eq!(summary.tmin, Some(tmin));
    assert_approx_eq!(summary.tavg.unwrap(), tavg, 1e-9);
    assert_eq!(summary.tmax, Some(tmax));
}

#[tokio::test]
async fn test_summary_whole_dataset_ordered() {
    let store = seeded_store().await;
    let range = DateRange::parse("2010-01-01", Some("2017-12-31")).unwrap();
    let summary = store.temperature_summary(&range).await.unwrap();

    let (tmin, tavg, tmax) = expected::STATS_ALL;
    assert_eq!(summary.tmin, Some(tmin));
    assert_approx_eq!(summary.tavg.unwrap(), tavg, 1e-9);
    assert_eq!(summary.tmax, Some(tmax));
    assert!(summary.tmin <= summary.tavg && summary.tavg <= summary.tmax);
}

#[tokio::test]
async fn test_summary_no_rows_is_all_none() {
    let store = seeded_store().await;
    let summary = store
        .temperature_summary(&DateRange::since(date("2018-01-01")))
        .await
        .unwrap();

    assert_eq!(summary, Default::default());
}

// ============================================================================
// Connection handling
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let store = seeded_store().await;
    store.ping().await.unwrap();
}

#[tokio::test]
async fn test_connect_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    test_utils::write_fixture_database(&path).await.unwrap();

    let url = format!("sqlite://{}", path.display());
    let store = ClimateStore::connect(&url, 2).await.unwrap();

    assert_eq!(store.station_ids().await.unwrap().len(), 3);
    assert_eq!(store.latest_date().await.unwrap(), Some(date(expected::LAST_DATE)));
}

#[tokio::test]
async fn test_connect_missing_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("missing.sqlite").display());

    let result = ClimateStore::connect(&url, 1).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_connect_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    test_utils::write_fixture_database(&path).await.unwrap();

    let store = ClimateStore::connect(&format!("sqlite://{}", path.display()), 1)
        .await
        .unwrap();
    let write = sqlx::query("DELETE FROM measurement").execute(store.pool()).await;
    assert!(write.is_err());
}

//! Common test fixtures for climate-api tests.

use sqlx::sqlite::SqlitePoolOptions;
use storage::ClimateStore;

/// Station code with the most observations in the sample dataset.
pub const MOST_OBSERVED_STATION: &str = "USC00519281";

/// Build an empty in-memory store with the snapshot schema applied.
///
/// The pool is capped at a single connection: each `sqlite::memory:`
/// connection gets its own private database, so a wider pool would hand
/// out empty databases to queries.
pub async fn memory_store() -> ClimateStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite connection");

    let store = ClimateStore::with_pool(pool);
    store.ensure_schema().await.expect("snapshot schema");
    store
}

/// Insert one station row.
pub async fn seed_station(
    store: &ClimateStore,
    code: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) {
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(code)
    .bind(name)
    .bind(latitude)
    .bind(longitude)
    .bind(elevation)
    .execute(store.pool())
    .await
    .expect("seed station row");
}

/// Insert one measurement row.
pub async fn seed_measurement(
    store: &ClimateStore,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: f64,
) {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(store.pool())
        .await
        .expect("seed measurement row");
}

/// Store seeded with two stations and a handful of observations around
/// the snapshot's trailing-year boundary (2016-08-23).
pub async fn sample_store() -> ClimateStore {
    let store = memory_store().await;

    seed_station(&store, MOST_OBSERVED_STATION, "WAIHEE 837.5, HI US", 21.45, -157.85, 32.9).await;
    seed_station(&store, "USC00511918", "HONOLULU OBSERVATORY 702.2, HI US", 21.32, -157.87, 0.9)
        .await;

    // Inside the trailing year
    seed_measurement(&store, MOST_OBSERVED_STATION, "2016-08-24", Some(1.45), 77.0).await;
    seed_measurement(&store, MOST_OBSERVED_STATION, "2017-01-01", Some(0.03), 72.0).await;
    seed_measurement(&store, MOST_OBSERVED_STATION, "2017-08-23", None, 81.0).await;
    seed_measurement(&store, "USC00511918", "2017-05-10", Some(0.0), 75.0).await;

    // Before the trailing year
    seed_measurement(&store, MOST_OBSERVED_STATION, "2016-08-22", Some(0.5), 79.0).await;
    seed_measurement(&store, "USC00511918", "2010-01-01", None, 63.0).await;

    store
}

//! Read-only climate snapshot store backed by SQLite.

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};

use climate_common::{ClimateError, ClimateResult};

/// Database connection pool and climate snapshot queries.
///
/// The snapshot is never written by this service; every operation is a
/// single read executed on a pooled connection that is released when the
/// call returns, on success and error paths alike.
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Create a new store connection from a database URL.
    pub async fn connect(database_url: &str) -> ClimateResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Used by tests that build in-memory databases.
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool (fixture seeding in tests).
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the snapshot tables if they do not exist.
    ///
    /// Production snapshots arrive pre-populated; this only backs
    /// in-memory test databases.
    pub async fn ensure_schema(&self) -> ClimateResult<()> {
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| {
                        ClimateError::DatabaseError(format!("Schema setup failed: {}", e))
                    })?;
            }
        }

        Ok(())
    }

    /// Cheap connectivity probe backing the readiness endpoint.
    pub async fn ping(&self) -> ClimateResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Ping failed: {}", e)))?;

        Ok(())
    }

    /// All measurement rows on or after `date`, every station.
    ///
    /// `date` is compared as text against the stored `YYYY-MM-DD` values;
    /// no ordering is imposed beyond what SQLite returns.
    pub async fn precipitation_since(&self, date: &str) -> ClimateResult<Vec<PrecipitationRow>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement WHERE date >= ?",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        tracing::debug!(since = date, rows = rows.len(), "precipitation query");
        Ok(rows)
    }

    /// Every station row in the snapshot.
    pub async fn list_stations(&self) -> ClimateResult<Vec<StationRow>> {
        let rows = sqlx::query_as::<_, StationRow>(
            "SELECT name, station, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows)
    }

    /// Temperature observations for one station on or after `date`.
    pub async fn temperatures_for_station_since(
        &self,
        station_code: &str,
        date: &str,
    ) -> ClimateResult<Vec<TobsRow>> {
        let rows = sqlx::query_as::<_, TobsRow>(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ?",
        )
        .bind(station_code)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        tracing::debug!(
            station = station_code,
            since = date,
            rows = rows.len(),
            "temperature observation query"
        );
        Ok(rows)
    }

    /// MIN/AVG/MAX of observed temperature over a date range.
    ///
    /// The range is `date >= start`, bounded above by `end` when given.
    /// An empty match yields NULL aggregates, passed through as `None`.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> ClimateResult<TemperatureStats> {
        let stats = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureStats>(
                    "SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max \
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TemperatureStats>(
                    "SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max \
                     FROM measurement WHERE date >= ?",
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(stats)
    }
}

/// One precipitation reading.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One station with its location metadata.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StationRow {
    pub name: String,
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One temperature observation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TobsRow {
    pub date: String,
    pub tobs: f64,
}

/// Temperature aggregate over a date range. All fields are NULL when no
/// rows matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// Snapshot schema, matching the pre-populated dataset layout.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    elevation REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp REAL,
    tobs REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_measurement_date ON measurement(date);
CREATE INDEX IF NOT EXISTS idx_measurement_station ON measurement(station, date)
"#;

//! Min/avg/max temperature aggregates over a caller-supplied date range.

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use serde::Serialize;
use std::sync::Arc;

use crate::handlers::{error_response, json_response};
use crate::state::AppState;

/// Temperature aggregate as it appears on the wire.
///
/// All fields are null when the range matched no rows. "Maxium" is the
/// key existing clients parse; the spelling stays.
#[derive(Debug, Serialize)]
struct TemperatureStatsRecord {
    #[serde(rename = "Minimum Temperature")]
    min: Option<f64>,

    #[serde(rename = "Average Temperature")]
    avg: Option<f64>,

    #[serde(rename = "Maxium Temperature")]
    max: Option<f64>,
}

/// GET /api/v1.0/:start - Aggregate from `start` through the end of the
/// snapshot
pub async fn start_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    range_stats(state, start, None).await
}

/// GET /api/v1.0/:start/:end - Aggregate over the inclusive range
pub async fn start_end_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    range_stats(state, start, Some(end)).await
}

async fn range_stats(state: Arc<AppState>, start: String, end: Option<String>) -> Response {
    // Path segments are opaque text. An unparseable date participates in
    // the SQL comparison as a literal and simply matches no rows.
    let stats = match state.store.temperature_stats(&start, end.as_deref()).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("Temperature stats query failed: {}", e);
            return error_response(&e);
        }
    };

    // Single aggregate, still wrapped in a one-element array.
    let records = vec![TemperatureStatsRecord {
        min: stats.min,
        avg: stats.avg,
        max: stats.max,
    }];

    json_response(&records)
}

//! Temperature observation handler for the most-observed station.

use axum::{extract::Extension, response::Response};
use serde_json::{Map, Value};
use std::sync::Arc;

use climate_common::time::trailing_year_start;

use crate::handlers::{error_response, json_response};
use crate::state::AppState;

/// Station with the most observations in the snapshot; the tobs route is
/// pinned to it.
pub const MOST_OBSERVED_STATION: &str = "USC00519281";

/// GET /api/v1.0/tobs - Trailing-year observations for the most-observed
/// station
///
/// Each reading is emitted as its own single-key object keyed by the
/// observation date. Existing clients parse this exact shape.
pub async fn tobs_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let since = trailing_year_start();

    let rows = match state
        .store
        .temperatures_for_station_since(MOST_OBSERVED_STATION, &since)
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Temperature observation query failed: {}", e);
            return error_response(&e);
        }
    };

    let records: Vec<Value> = rows
        .into_iter()
        .map(|r| {
            let mut record = Map::with_capacity(1);
            record.insert(r.date, Value::from(r.tobs));
            Value::Object(record)
        })
        .collect();

    json_response(&records)
}

//! Station listing handler.

use axum::{extract::Extension, response::Response};
use serde::Serialize;
use std::sync::Arc;

use crate::handlers::{error_response, json_response};
use crate::state::AppState;

/// One station as it appears on the wire.
#[derive(Debug, Serialize)]
struct StationRecord {
    #[serde(rename = "Station ID")]
    station_id: String,

    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Latitude")]
    latitude: f64,

    #[serde(rename = "Longitude")]
    longitude: f64,

    #[serde(rename = "Elevation")]
    elevation: f64,
}

/// GET /api/v1.0/stations - Every station in the snapshot
pub async fn stations_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let rows = match state.store.list_stations().await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Station query failed: {}", e);
            return error_response(&e);
        }
    };

    let records: Vec<StationRecord> = rows
        .into_iter()
        .map(|r| StationRecord {
            station_id: r.station,
            name: r.name,
            latitude: r.latitude,
            longitude: r.longitude,
            elevation: r.elevation,
        })
        .collect();

    json_response(&records)
}

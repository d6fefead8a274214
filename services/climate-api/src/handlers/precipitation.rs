//! Trailing-year precipitation handler.

use axum::{extract::Extension, response::Response};
use serde::Serialize;
use std::sync::Arc;

use climate_common::time::trailing_year_start;

use crate::handlers::{error_response, json_response};
use crate::state::AppState;

/// One precipitation reading as it appears on the wire.
#[derive(Debug, Serialize)]
struct PrecipitationRecord {
    #[serde(rename = "Date")]
    date: String,

    /// Null when the station recorded no precipitation value that day.
    #[serde(rename = "Precipitation")]
    precipitation: Option<f64>,
}

/// GET /api/v1.0/precipitation - All readings from the trailing year
pub async fn precipitation_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let since = trailing_year_start();

    let rows = match state.store.precipitation_since(&since).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Precipitation query failed: {}", e);
            return error_response(&e);
        }
    };

    let records: Vec<PrecipitationRecord> = rows
        .into_iter()
        .map(|r| PrecipitationRecord {
            date: r.date,
            precipitation: r.prcp,
        })
        .collect();

    json_response(&records)
}

//! HTTP request handlers for the climate API.

pub mod health;
pub mod landing;
pub mod precipitation;
pub mod range_stats;
pub mod stations;
pub mod tobs;

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use serde::Serialize;

use climate_common::ClimateError;

/// JSON error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ExceptionBody {
    /// Exception type identifier.
    #[serde(rename = "type")]
    pub type_: String,

    /// HTTP status code.
    pub status: u16,

    /// Detailed error message.
    pub detail: String,
}

/// Serialize a value into a 200 JSON response.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_string(value) {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap(),
        Err(e) => error_response(&ClimateError::from(e)),
    }
}

/// Map a store error onto its HTTP status with a JSON exception body.
pub(crate) fn error_response(err: &ClimateError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = ExceptionBody {
        type_: "server-error".to_string(),
        status: status.as_u16(),
        detail: err.to_string(),
    };

    let json = serde_json::to_string(&body).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_maps_database_error_to_500() {
        let err = ClimateError::DatabaseError("connection refused".to_string());
        let response = error_response(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_exception_body_shape() {
        let body = ExceptionBody {
            type_: "server-error".to_string(),
            status: 500,
            detail: "Database error: boom".to_string(),
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"type\":\"server-error\""));
        assert!(json.contains("\"status\":500"));
    }
}

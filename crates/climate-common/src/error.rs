//! Error types for the climate-api services.

use thiserror::Error;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for climate data operations.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Station not found: {0}")]
    StationNotFound(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ClimateError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::MissingParameter(_) | ClimateError::InvalidParameter { .. } => 400,

            ClimateError::StationNotFound(_) => 404,

            ClimateError::ServiceUnavailable(_) => 503,

            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for ClimateError {
    fn from(err: std::io::Error) -> Self {
        ClimateError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for ClimateError {
    fn from(err: serde_json::Error) -> Self {
        ClimateError::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ClimateError::MissingParameter("start".into()).http_status_code(),
            400
        );
        assert_eq!(
            ClimateError::StationNotFound("USC00000000".into()).http_status_code(),
            404
        );
        assert_eq!(
            ClimateError::DatabaseError("boom".into()).http_status_code(),
            500
        );
        assert_eq!(
            ClimateError::ServiceUnavailable("starting".into()).http_status_code(),
            503
        );
    }

    #[test]
    fn test_display_messages() {
        let err = ClimateError::DatabaseError("connection refused".into());
        assert_eq!(err.to_string(), "Database error: connection refused");
    }
}

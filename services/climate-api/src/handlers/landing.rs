//! Landing page handler.

use axum::{
    http::{header, StatusCode},
    response::Response,
};

/// Route templates advertised on the landing page, verbatim.
pub const ROUTE_TEMPLATES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// GET / - Route listing for discoverability
pub async fn landing_handler() -> Response {
    let mut body = String::from("Available Routes:<br/>");
    body.push_str(&ROUTE_TEMPLATES.join("<br/>"));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(body.into())
        .unwrap()
}

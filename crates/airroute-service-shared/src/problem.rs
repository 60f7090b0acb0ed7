//! Plain-text error responses.
//!
//! The query endpoint answers with a bare text body in both the success and
//! the failure case; only the status code tells them apart.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use airroute_lib::{Error as LibError, ErrorKind};

/// Body returned when either query parameter is missing or empty.
pub const INVALID_PARAMETERS: &str = "Invalid origin or destination parameters";

/// Error response rendered as `text/plain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub status: StatusCode,
    pub message: String,
}

impl Problem {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 400 response for missing or empty query parameters.
    pub fn invalid_parameters() -> Self {
        Self::bad_request(INVALID_PARAMETERS)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for Problem {}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Map a library error onto a status code, keeping its message as the body.
pub fn from_lib_error(err: &LibError) -> Problem {
    match err.kind() {
        ErrorKind::QueryInput => Problem::bad_request(err.to_string()),
        ErrorKind::NoRoute => Problem::not_found(err.to_string()),
        ErrorKind::Ingestion | ErrorKind::Shape => Problem::internal_error(err.to_string()),
    }
}

/// Metric label describing why a search failed.
pub fn failure_reason(err: &LibError) -> &'static str {
    match err {
        LibError::SameOriginAndDestination { .. } => "same_airport",
        LibError::InvalidOrigin { .. } => "unknown_origin",
        LibError::InvalidDestination { .. } => "unknown_destination",
        LibError::RouteNotFound { .. } => "no_route",
        _ => "internal_error",
    }
}

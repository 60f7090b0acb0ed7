//! Health check handlers for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "ok" once the process is serving.
    pub status: String,
    pub service: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airports_loaded: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes_loaded: Option<usize>,

    /// RFC 3339 timestamp of when the network finished loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            routes_loaded: None,
            loaded_at: None,
        }
    }

    /// Create a ready status describing the loaded network.
    pub fn ready(service: &str, version: &str, state: &AppState) -> Self {
        let network = state.network();
        Self {
            airports_loaded: Some(network.airports().len()),
            routes_loaded: Some(network.routes().len()),
            loaded_at: Some(state.loaded_at().to_rfc3339()),
            ..Self::alive(service, version)
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"airroute-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// The state only exists after a successful load, so a running service is
/// always ready.
///
/// ```text
/// GET /health/ready
/// {"status":"ok",...,"airports_loaded":8,"routes_loaded":10,"loaded_at":"..."}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &state);
    (StatusCode::OK, Json(status))
}

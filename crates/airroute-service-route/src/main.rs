//! Airline route query HTTP service.
//!
//! Loads the dataset once at startup and answers shortest-route queries over
//! HTTP with a plain-text `->`-joined path.
//!
//! # Endpoints
//!
//! - `GET /backendTest?origin=YYZ&destination=LAX` - Search for a route
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `AIRROUTE_DATA_DIR` - Directory holding the CSV files (default: /data)
//! - `AIRROUTE_UNKNOWN_AIRPORTS` - `skip` (default) or `zero`
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - Set to `false` to disable `/metrics`

use std::env;
use std::net::SocketAddr;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use airroute_lib::{plan_route, LoadOptions, UnknownAirportPolicy};
use airroute_service_shared::{
    failure_reason, from_lib_error, health_live, health_ready, init_logging, init_metrics,
    metrics_handler, record_load_duration, record_route_failed, record_route_found,
    record_route_hops, AppState, LoggingConfig, MetricsConfig, Problem, RouteQuery, Validate,
};

const SERVICE: &str = "route";

/// Settings read from the environment at startup.
#[derive(Debug, Clone)]
struct ServiceConfig {
    data_dir: String,
    port: u16,
    unknown_airports: UnknownAirportPolicy,
}

impl ServiceConfig {
    fn from_env() -> Result<Self, String> {
        let data_dir = env::var("AIRROUTE_DATA_DIR").unwrap_or_else(|_| "/data".to_string());
        let port = match env::var("SERVICE_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| format!("invalid SERVICE_PORT '{value}'"))?,
            Err(_) => 8080,
        };
        let unknown_airports = match env::var("AIRROUTE_UNKNOWN_AIRPORTS") {
            Ok(value) => value.parse()?,
            Err(_) => UnknownAirportPolicy::default(),
        };

        Ok(Self {
            data_dir,
            port,
            unknown_airports,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(SERVICE);
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        warn!(error = %e, "metrics unavailable, continuing without them");
    }

    let config = ServiceConfig::from_env()?;
    info!(
        data_dir = %config.data_dir,
        port = config.port,
        unknown_airports = %config.unknown_airports,
        "starting route service"
    );

    let options = LoadOptions::default().with_unknown_airports(config.unknown_airports);
    let state = AppState::load(&config.data_dir, options).map_err(|e| {
        error!(error = %e, path = %config.data_dir, "failed to load application state");
        e
    })?;

    record_load_duration(state.load_time().as_secs_f64());
    info!(
        load_time_ms = state.load_time().as_millis() as u64,
        airports = state.network().airports().len(),
        routes = state.network().routes().len(),
        "application state loaded"
    );

    let app = router(state, &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route("/backendTest", get(route_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle `GET /backendTest`.
///
/// The search runs on the blocking pool so a long exploration never stalls
/// the async workers.
async fn route_handler(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<String, Problem> {
    let request = query
        .map_err(|_| Box::new(Problem::invalid_parameters()))
        .and_then(|Query(query)| query.validate())
        .map_err(|problem| {
            record_route_failed("invalid_parameters", SERVICE);
            *problem
        })?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        "handling route request"
    );

    let search_state = state.clone();
    let outcome =
        tokio::task::spawn_blocking(move || plan_route(search_state.network(), &request)).await;

    let plan = match outcome {
        Ok(Ok(plan)) => plan,
        Ok(Err(e)) => {
            warn!(error = %e, "route search failed");
            record_route_failed(failure_reason(&e), SERVICE);
            return Err(from_lib_error(&e));
        }
        Err(e) => {
            error!(error = %e, "route search task aborted");
            record_route_failed("internal_error", SERVICE);
            return Err(Problem::internal_error("route search aborted"));
        }
    };

    record_route_found(SERVICE);
    record_route_hops(plan.hop_count());
    info!(
        hops = plan.hop_count(),
        distance = plan.distance,
        "route computed successfully"
    );

    Ok(plan.path_string())
}

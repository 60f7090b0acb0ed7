//! Shared infrastructure for the airline route query service.
//!
//! This crate provides the HTTP glue around `airroute-lib`:
//!
//! - [`AppState`]: network loaded once at startup and shared by every handler
//! - [`health`]: liveness and readiness handlers
//! - [`Problem`]: plain-text error responses mapped from library errors
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: structured logging setup
//! - [`RouteQuery`]: query-string parameters with validation
//!
//! # Architecture
//!
//! Handlers stay thin; all search logic lives in `airroute-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Extract query parameters                                 │
//! │  - Validate origin and destination                          │
//! │  - Call airroute-lib on the blocking pool                   │
//! │  - Render plain-text result or error                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module loads the repository's fixture dataset into an
//! [`AppState`]. Enable the `test-utils` feature to access it from dependent
//! crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
mod problem;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_load_duration, record_route_failed, record_route_found,
    record_route_hops, MetricsConfig, MetricsError,
};
pub use problem::{failure_reason, from_lib_error, Problem, INVALID_PARAMETERS};
pub use request::{RouteQuery, Validate};
pub use state::{AppState, AppStateError};

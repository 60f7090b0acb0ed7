//! Application state for the route query service.
//!
//! The network is loaded once at startup and never mutated afterwards, so
//! handlers share it through an `Arc` without any locking.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use airroute_lib::{load_network, Error as LibError, LoadOptions, Network};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Loading or validating the dataset failed.
    NetworkLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkLoad(e) => write!(f, "failed to load network: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NetworkLoad(e) => Some(e),
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::NetworkLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheap to clone; clones share the same loaded network.
///
/// # Example
///
/// ```ignore
/// use axum::{extract::State, routing::get, Router};
/// use airroute_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     state.network().airports().len().to_string()
/// }
///
/// let state = AppState::load("/data", Default::default()).unwrap();
/// let app = Router::new().route("/count", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    network: Network,
    loaded_at: DateTime<Utc>,
    load_time: Duration,
}

impl AppState {
    /// Load application state from a data directory.
    pub fn load(data_dir: impl AsRef<Path>, options: LoadOptions) -> Result<Self, AppStateError> {
        let data_dir = data_dir.as_ref();

        tracing::info!(path = %data_dir.display(), policy = %options.unknown_airports, "loading network");
        let started = Instant::now();
        let network = load_network(data_dir, options)?;
        let load_time = started.elapsed();

        Ok(Self::with_load_time(network, load_time))
    }

    /// Create application state from an already loaded network.
    pub fn from_network(network: Network) -> Self {
        Self::with_load_time(network, Duration::ZERO)
    }

    fn with_load_time(network: Network, load_time: Duration) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                network,
                loaded_at: Utc::now(),
                load_time,
            }),
        }
    }

    /// Access the loaded network.
    pub fn network(&self) -> &Network {
        &self.inner.network
    }

    /// Wall-clock time the network finished loading.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.inner.loaded_at
    }

    /// Time spent reading and indexing the dataset.
    pub fn load_time(&self) -> Duration {
        self.inner.load_time
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("airport_count", &self.inner.network.airports().len())
            .field("route_count", &self.inner.network.routes().len())
            .field("load_time", &self.inner.load_time)
            .finish()
    }
}

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::network::{AirportCode, Network};
use crate::path::{find_route, RoutePath, PATH_SEPARATOR};

/// High-level route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: AirportCode,
    pub destination: AirportCode,
}

impl RouteRequest {
    pub fn new(origin: impl Into<AirportCode>, destination: impl Into<AirportCode>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub steps: Vec<AirportCode>,
    pub distance: f64,
}

impl RoutePlan {
    /// Number of flights in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Route rendered as `->`-joined airport codes.
    pub fn path_string(&self) -> String {
        self.steps.join(PATH_SEPARATOR)
    }
}

impl From<RoutePath> for RoutePlan {
    fn from(path: RoutePath) -> Self {
        let origin = path.origin().unwrap_or_default().to_string();
        let destination = path.destination().unwrap_or_default().to_string();
        Self {
            origin,
            destination,
            steps: path.airports,
            distance: path.distance,
        }
    }
}

/// Plan a route for `request` against the loaded network.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let path = find_route(network, &request.origin, &request.destination)?;
    debug!(
        origin = %request.origin,
        destination = %request.destination,
        hops = path.hop_count(),
        "route planned"
    );
    Ok(RoutePlan::from(path))
}

/// Search for a route and return it as `->`-joined airport codes.
pub fn start_route_search(network: &Network, origin: &str, destination: &str) -> Result<String> {
    find_route(network, origin, destination).map(|path| path.to_string())
}

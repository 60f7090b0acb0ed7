use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::info;

use crate::decode::{self, RouteOutcome, UnknownAirportPolicy};
use crate::error::{Collection, Error, Result};

/// Three-character IATA airport code.
pub type AirportCode = String;

/// Two-letter airline code.
pub type AirlineCode = String;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Euclidean norm of the latitude/longitude difference.
    ///
    /// This is a comparison metric only, not a great-circle distance.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dlat = other.latitude - self.latitude;
        let dlon = other.longitude - self.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// Airline reference data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airline {
    pub name: String,
    pub two_letter_code: AirlineCode,
    pub three_letter_code: String,
    pub country: String,
}

/// Airport together with its outgoing connections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata: AirportCode,
    pub position: Coordinates,
    /// Directly reachable airports keyed by code, valued by edge distance.
    pub connections: BTreeMap<AirportCode, f64>,
}

impl Airport {
    /// Distance of the direct edge to `code`, if one exists.
    pub fn connection(&self, code: &str) -> Option<f64> {
        self.connections.get(code).copied()
    }
}

/// Ordered (origin, destination) pair identifying a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RouteKey {
    pub origin: AirportCode,
    pub destination: AirportCode,
}

impl RouteKey {
    pub fn new(origin: impl Into<AirportCode>, destination: impl Into<AirportCode>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Directed route between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub airline_id: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub distance: f64,
}

/// Counters collected while decoding route rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub routes_inserted: usize,
    pub duplicate_routes: usize,
    pub unknown_airport_routes: usize,
    pub routes_before_airports: usize,
}

impl LoadStats {
    fn record(&mut self, outcome: &RouteOutcome) {
        match outcome {
            RouteOutcome::Inserted => self.routes_inserted += 1,
            RouteOutcome::Duplicate => self.duplicate_routes += 1,
            RouteOutcome::UnknownAirport { .. } => self.unknown_airport_routes += 1,
            RouteOutcome::NoAirports => self.routes_before_airports += 1,
        }
    }
}

/// Mutable collections used during the single load pass.
///
/// Rows are folded in through the `push_*` methods; [`NetworkBuilder::build`]
/// performs the shape validation and freezes the result into a [`Network`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    airlines: HashMap<AirlineCode, Airline>,
    airports: HashMap<AirportCode, Airport>,
    routes: HashMap<RouteKey, Route>,
    policy: UnknownAirportPolicy,
    stats: LoadStats,
}

impl NetworkBuilder {
    pub fn new(policy: UnknownAirportPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Decode an airline row into the builder.
    pub fn push_airline(&mut self, row: &[&str]) -> std::result::Result<(), decode::MissingField> {
        decode::decode_airline(row, &mut self.airlines)
    }

    /// Decode an airport row into the builder.
    pub fn push_airport(&mut self, row: &[&str]) -> std::result::Result<(), decode::MissingField> {
        decode::decode_airport(row, &mut self.airports)
    }

    /// Decode a route row into the builder, deriving adjacency.
    pub fn push_route(
        &mut self,
        row: &[&str],
    ) -> std::result::Result<RouteOutcome, decode::MissingField> {
        let outcome = decode::decode_route(row, &mut self.routes, &mut self.airports, self.policy)?;
        self.stats.record(&outcome);
        Ok(outcome)
    }

    /// Insert a route whose distance was computed elsewhere.
    ///
    /// The same first-seen rules as [`NetworkBuilder::push_route`] apply.
    pub fn insert_route(&mut self, route: Route) -> RouteOutcome {
        let outcome = decode::insert_route(route, &mut self.routes, &mut self.airports);
        self.stats.record(&outcome);
        outcome
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Validate that every collection is populated and freeze the network.
    ///
    /// Collections are checked in the order airports, routes, airlines; the
    /// first empty one is reported.
    pub fn build(self) -> Result<Network> {
        let checks = [
            (Collection::Airports, self.airports.is_empty()),
            (Collection::Routes, self.routes.is_empty()),
            (Collection::Airlines, self.airlines.is_empty()),
        ];
        if let Some((collection, _)) = checks.into_iter().find(|(_, empty)| *empty) {
            return Err(Error::EmptyCollection { collection });
        }

        info!(
            airlines = self.airlines.len(),
            airports = self.airports.len(),
            routes = self.routes.len(),
            skipped_routes = self.stats.unknown_airport_routes,
            "network loaded"
        );

        Ok(Network {
            airlines: self.airlines,
            airports: self.airports,
            routes: self.routes,
            stats: self.stats,
        })
    }
}

/// Immutable in-memory airline network.
#[derive(Debug, Clone)]
pub struct Network {
    airlines: HashMap<AirlineCode, Airline>,
    airports: HashMap<AirportCode, Airport>,
    routes: HashMap<RouteKey, Route>,
    stats: LoadStats,
}

impl Network {
    /// Lookup an airport by its case-sensitive IATA code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains_airport(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Lookup an airline by its two-letter code.
    pub fn airline(&self, code: &str) -> Option<&Airline> {
        self.airlines.get(code)
    }

    /// Lookup the route stored for an ordered pair.
    pub fn route(&self, origin: &str, destination: &str) -> Option<&Route> {
        self.routes.get(&RouteKey::new(origin, destination))
    }

    /// Outgoing connections of an airport; unknown codes have none.
    pub fn connections(&self, code: &str) -> Option<&BTreeMap<AirportCode, f64>> {
        self.airports.get(code).map(|airport| &airport.connections)
    }

    pub fn airports(&self) -> &HashMap<AirportCode, Airport> {
        &self.airports
    }

    pub fn airlines(&self) -> &HashMap<AirlineCode, Airline> {
        &self.airlines
    }

    pub fn routes(&self) -> &HashMap<RouteKey, Route> {
        &self.routes
    }

    /// Counters gathered while the routes source was decoded.
    pub fn load_stats(&self) -> LoadStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_builder() -> NetworkBuilder {
        let mut builder = NetworkBuilder::new(UnknownAirportPolicy::Skip);
        builder
            .push_airline(&["Air Canada", "AC", "ACA", "Canada"])
            .unwrap();
        builder
            .push_airport(&["Pearson", "Toronto", "Canada", "YYZ", "43.67", "-79.63"])
            .unwrap();
        builder
            .push_airport(&["JFK", "New York", "USA", "JFK", "40.64", "-73.78"])
            .unwrap();
        builder.push_route(&["AC", "YYZ", "JFK"]).unwrap();
        builder
    }

    #[test]
    fn coordinates_distance_is_euclidean() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn build_freezes_populated_collections() {
        let network = populated_builder().build().expect("valid network");
        assert_eq!(network.airports().len(), 2);
        assert_eq!(network.airlines().len(), 1);
        assert_eq!(network.routes().len(), 1);
        assert!(network.route("YYZ", "JFK").is_some());
        assert!(network.route("JFK", "YYZ").is_none());
        assert_eq!(network.load_stats().routes_inserted, 1);
    }

    #[test]
    fn build_reports_airports_before_routes_and_airlines() {
        let builder = NetworkBuilder::default();
        match builder.build() {
            Err(Error::EmptyCollection { collection }) => {
                assert_eq!(collection, Collection::Airports)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn build_reports_missing_airlines_last() {
        let mut builder = NetworkBuilder::default();
        builder
            .push_airport(&["A", "A", "A", "AAA", "0", "0"])
            .unwrap();
        builder
            .push_airport(&["B", "B", "B", "BBB", "1", "1"])
            .unwrap();
        builder.push_route(&["XX", "AAA", "BBB"]).unwrap();

        match builder.build() {
            Err(Error::EmptyCollection { collection }) => {
                assert_eq!(collection, Collection::Airlines)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_code_has_no_connections() {
        let network = populated_builder().build().unwrap();
        assert!(network.connections("XXX").is_none());
        assert_eq!(
            network.airport("YYZ").and_then(|a| a.connection("JFK")),
            network.route("YYZ", "JFK").map(|r| r.distance)
        );
    }
}

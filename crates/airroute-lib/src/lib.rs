//! AirRoute library entry points.
//!
//! This crate exposes helpers to load the airline dataset (airlines, airports
//! and routes) from CSV files into an immutable in-memory network and to run
//! the route search over it. Higher-level consumers (CLI, HTTP service) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod decode;
pub mod error;
pub mod network;
pub mod path;
pub mod routing;

pub use dataset::{
    load_network, load_network_from_readers, LoadOptions, AIRLINES_FILE, AIRPORTS_FILE,
    ROUTES_FILE,
};
pub use decode::{
    decode_airline, decode_airport, decode_route, MissingField, RouteOutcome,
    UnknownAirportPolicy,
};
pub use error::{Collection, Error, ErrorKind, RecordSource, Result};
pub use network::{
    Airline, AirlineCode, Airport, AirportCode, Coordinates, LoadStats, Network, NetworkBuilder,
    Route, RouteKey,
};
pub use path::{find_route, RoutePath, PATH_SEPARATOR};
pub use routing::{plan_route, start_route_search, RoutePlan, RouteRequest};

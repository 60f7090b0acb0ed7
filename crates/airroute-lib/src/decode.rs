//! Row decoders for the three tabular sources.
//!
//! Each decoder takes one already-tokenized row and folds it into its
//! collection. Decoders never see the header row and never perform I/O; the
//! only failure they report is a row that is too short to decode.

use std::collections::btree_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::network::{Airline, Airport, AirportCode, Coordinates, Route, RouteKey};

/// A row did not contain a field its decoder requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing field `{field}` at column {index} (row has {len} fields)")]
pub struct MissingField {
    pub field: &'static str,
    pub index: usize,
    pub len: usize,
}

/// How route rows referencing an unknown airport are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownAirportPolicy {
    /// Skip the row: no route and no edge are recorded.
    #[default]
    Skip,
    /// Treat the unknown endpoint as sitting at coordinates (0, 0) and keep
    /// the route. Matches the distances produced by earlier datasets.
    ZeroCoordinates,
}

impl fmt::Display for UnknownAirportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            UnknownAirportPolicy::Skip => "skip",
            UnknownAirportPolicy::ZeroCoordinates => "zero",
        };
        f.write_str(value)
    }
}

impl FromStr for UnknownAirportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(UnknownAirportPolicy::Skip),
            "zero" | "zero-coordinates" | "zero_coordinates" => {
                Ok(UnknownAirportPolicy::ZeroCoordinates)
            }
            other => Err(format!(
                "unknown airport policy '{other}', expected 'skip' or 'zero'"
            )),
        }
    }
}

/// Result of folding one route row into the collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A new route was stored (and an edge added when the origin is known).
    Inserted,
    /// The ordered pair was already present; nothing changed.
    Duplicate,
    /// An endpoint is not a known airport and the row was skipped.
    UnknownAirport { code: AirportCode },
    /// No airports were loaded yet, so the row was ignored.
    NoAirports,
}

fn field<'a>(row: &[&'a str], index: usize, name: &'static str) -> Result<&'a str, MissingField> {
    row.get(index).copied().ok_or(MissingField {
        field: name,
        index,
        len: row.len(),
    })
}

/// Decode `[name, two-letter code, three-letter code, country]`.
///
/// Airlines are keyed by their two-letter code; a later row with the same
/// code replaces the earlier one.
pub fn decode_airline(
    row: &[&str],
    airlines: &mut HashMap<String, Airline>,
) -> Result<(), MissingField> {
    let name = field(row, 0, "name")?;
    let two_letter_code = field(row, 1, "two-letter code")?;
    let three_letter_code = field(row, 2, "three-letter code")?;
    let country = field(row, 3, "country")?;

    airlines.insert(
        two_letter_code.to_string(),
        Airline {
            name: name.to_string(),
            two_letter_code: two_letter_code.to_string(),
            three_letter_code: three_letter_code.to_string(),
            country: country.to_string(),
        },
    );
    Ok(())
}

/// Decode `[name, city, country, IATA code, latitude, longitude]`.
///
/// The first row seen for an IATA code wins. Unparseable coordinates fall
/// back to `0.0` rather than rejecting the row; surrounding whitespace makes
/// a coordinate unparseable.
pub fn decode_airport(
    row: &[&str],
    airports: &mut HashMap<AirportCode, Airport>,
) -> Result<(), MissingField> {
    let name = field(row, 0, "name")?;
    let city = field(row, 1, "city")?;
    let country = field(row, 2, "country")?;
    let iata = field(row, 3, "IATA code")?;
    let latitude = field(row, 4, "latitude")?;
    let longitude = field(row, 5, "longitude")?;

    if airports.contains_key(iata) {
        trace!(iata, "ignoring duplicate airport row");
        return Ok(());
    }

    let position = Coordinates::new(
        parse_coordinate(iata, "latitude", latitude),
        parse_coordinate(iata, "longitude", longitude),
    );

    airports.insert(
        iata.to_string(),
        Airport {
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            iata: iata.to_string(),
            position,
            connections: Default::default(),
        },
    );
    Ok(())
}

fn parse_coordinate(iata: &str, axis: &'static str, raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or_else(|err| {
        debug!(iata, axis, raw, error = %err, "unparseable coordinate, using 0");
        0.0
    })
}

/// Decode `[airline id, origin code, destination code]`.
///
/// Does nothing while `airports` is empty. The route distance is derived from
/// the endpoint coordinates; the first row for an ordered pair wins and adds
/// the directed edge origin -> destination unless that edge already exists.
pub fn decode_route(
    row: &[&str],
    routes: &mut HashMap<RouteKey, Route>,
    airports: &mut HashMap<AirportCode, Airport>,
    policy: UnknownAirportPolicy,
) -> Result<RouteOutcome, MissingField> {
    if airports.is_empty() {
        return Ok(RouteOutcome::NoAirports);
    }

    let airline_id = field(row, 0, "airline id")?;
    let origin = field(row, 1, "origin")?;
    let destination = field(row, 2, "destination")?;

    let origin_position = airports.get(origin).map(|airport| airport.position);
    let destination_position = airports.get(destination).map(|airport| airport.position);

    let (from, to) = match (origin_position, destination_position) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => match policy {
            UnknownAirportPolicy::ZeroCoordinates => {
                (from.unwrap_or_default(), to.unwrap_or_default())
            }
            UnknownAirportPolicy::Skip => {
                let code = if from.is_none() { origin } else { destination };
                trace!(airline_id, origin, destination, unknown = code, "skipping route");
                return Ok(RouteOutcome::UnknownAirport {
                    code: code.to_string(),
                });
            }
        },
    };

    let route = Route {
        airline_id: airline_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance: from.distance_to(&to),
    };
    Ok(insert_route(route, routes, airports))
}

/// Store `route` unless its ordered pair is already known, adding the edge
/// origin -> destination when the origin is a known airport without one.
pub fn insert_route(
    route: Route,
    routes: &mut HashMap<RouteKey, Route>,
    airports: &mut HashMap<AirportCode, Airport>,
) -> RouteOutcome {
    let key = RouteKey::new(route.origin.as_str(), route.destination.as_str());
    if routes.contains_key(&key) {
        return RouteOutcome::Duplicate;
    }

    if let Some(airport) = airports.get_mut(&route.origin) {
        if let Entry::Vacant(slot) = airport.connections.entry(route.destination.clone()) {
            slot.insert(route.distance);
        }
    }

    routes.insert(key, route);
    RouteOutcome::Inserted
}

//! Depth-first route search with branch-and-bound pruning.
//!
//! The search is not a shortest-path algorithm. Every airport is entered at
//! most once per invocation, across all branches, so a cheaper path through
//! an airport first reached on a worse branch can be missed. Branches whose
//! accumulated distance already meets or exceeds the best complete candidate
//! are abandoned. Neighbours are explored in ascending code order, which makes
//! the result deterministic for a given network.

use std::collections::{btree_map, BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{AirportCode, Network};

/// Separator used when rendering a path as text.
pub const PATH_SEPARATOR: &str = "->";

static NO_CONNECTIONS: BTreeMap<AirportCode, f64> = BTreeMap::new();

/// Path found by the search, from origin to destination inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePath {
    pub airports: Vec<AirportCode>,
    pub distance: f64,
}

impl RoutePath {
    /// Number of flights in the path.
    pub fn hop_count(&self) -> usize {
        self.airports.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&str> {
        self.airports.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.airports.last().map(String::as_str)
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.airports.join(PATH_SEPARATOR))
    }
}

/// Find a route between `origin` and `destination`.
///
/// Fails with [`Error::SameOriginAndDestination`], [`Error::InvalidOrigin`]
/// or [`Error::InvalidDestination`] before searching, and with
/// [`Error::RouteNotFound`] when no branch reaches the destination.
pub fn find_route(network: &Network, origin: &str, destination: &str) -> Result<RoutePath> {
    if origin == destination {
        return Err(Error::SameOriginAndDestination {
            code: origin.to_string(),
        });
    }
    if !network.contains_airport(origin) {
        return Err(Error::InvalidOrigin {
            code: origin.to_string(),
        });
    }
    if !network.contains_airport(destination) {
        return Err(Error::InvalidDestination {
            code: destination.to_string(),
        });
    }

    let mut context = SearchContext::new(network, destination);
    context.explore(origin);

    match context.best {
        Some(best) => {
            debug!(
                origin,
                destination,
                distance = best.distance,
                visited = context.visited.len(),
                "route found"
            );
            Ok(best)
        }
        None => {
            debug!(
                origin,
                destination,
                visited = context.visited.len(),
                "search exhausted without reaching destination"
            );
            Err(Error::RouteNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
        }
    }
}

/// One airport on the current branch and the neighbours still to try.
struct Frame<'a> {
    distance: f64,
    neighbours: btree_map::Iter<'a, AirportCode, f64>,
}

/// Mutable state of a single search invocation.
struct SearchContext<'a> {
    network: &'a Network,
    destination: &'a str,
    visited: HashSet<&'a str>,
    path: Vec<&'a str>,
    best: Option<RoutePath>,
}

impl<'a> SearchContext<'a> {
    fn new(network: &'a Network, destination: &'a str) -> Self {
        Self {
            network,
            destination,
            visited: HashSet::new(),
            path: Vec::new(),
            best: None,
        }
    }

    fn explore(&mut self, origin: &'a str) {
        let mut stack = vec![self.enter(origin, 0.0)];

        while let Some(frame) = stack.last_mut() {
            let Some((next, weight)) = frame.neighbours.next() else {
                stack.pop();
                self.path.pop();
                continue;
            };

            let next = next.as_str();
            if next == self.destination {
                continue;
            }

            let distance = frame.distance + weight;
            if self.is_bounded(distance) || self.visited.contains(next) {
                continue;
            }

            let frame = self.enter(next, distance);
            stack.push(frame);
        }
    }

    /// Mark `code` visited, extend the current path and offer a candidate if
    /// the destination is a direct neighbour.
    fn enter(&mut self, code: &'a str, distance: f64) -> Frame<'a> {
        let connections = self.network.connections(code).unwrap_or(&NO_CONNECTIONS);

        self.visited.insert(code);
        self.path.push(code);

        if let Some(weight) = connections.get(self.destination) {
            self.offer(distance + weight);
        }

        Frame {
            distance,
            neighbours: connections.iter(),
        }
    }

    fn offer(&mut self, distance: f64) {
        if self
            .best
            .as_ref()
            .is_some_and(|best| distance >= best.distance)
        {
            return;
        }

        let airports = self
            .path
            .iter()
            .copied()
            .chain(std::iter::once(self.destination))
            .map(str::to_string)
            .collect();
        self.best = Some(RoutePath { airports, distance });
    }

    fn is_bounded(&self, distance: f64) -> bool {
        self.best
            .as_ref()
            .is_some_and(|best| distance >= best.distance)
    }
}

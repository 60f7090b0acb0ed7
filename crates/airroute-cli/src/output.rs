//! Output formatting for route and dataset summaries.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use airroute_lib::{Network, RoutePlan};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Collection sizes and load counters of a loaded network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub airlines: usize,
    pub airports: usize,
    pub routes: usize,
    pub duplicate_routes: usize,
    pub skipped_routes: usize,
}

impl From<&Network> for NetworkSummary {
    fn from(network: &Network) -> Self {
        let stats = network.load_stats();
        Self {
            airlines: network.airlines().len(),
            airports: network.airports().len(),
            routes: network.routes().len(),
            duplicate_routes: stats.duplicate_routes,
            skipped_routes: stats.unknown_airport_routes + stats.routes_before_airports,
        }
    }
}

/// Render a planned route: the `->`-joined path, optionally followed by its
/// distance.
pub fn format_route_text(plan: &RoutePlan, show_distance: bool) -> String {
    let mut out = plan.path_string();
    out.push('\n');
    if show_distance {
        let _ = writeln!(out, "distance: {:.4}", plan.distance);
    }
    out
}

pub fn format_summary_text(summary: &NetworkSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "airlines: {}", summary.airlines);
    let _ = writeln!(out, "airports: {}", summary.airports);
    let _ = writeln!(out, "routes: {}", summary.routes);
    let _ = writeln!(out, "duplicate route rows: {}", summary.duplicate_routes);
    let _ = writeln!(out, "skipped route rows: {}", summary.skipped_routes);
    out
}

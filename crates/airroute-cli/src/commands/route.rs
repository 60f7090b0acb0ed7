//! Route command handler.

use std::path::Path;

use anyhow::Result;

use airroute_lib::{plan_route, LoadOptions, RouteRequest};

use crate::output::{format_route_text, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin airport code.
    pub from: String,
    /// Destination airport code.
    pub to: String,
    /// Also print the accumulated distance.
    pub show_distance: bool,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
    }
}

/// Handle the `route` subcommand.
pub fn handle_route(
    args: &RouteCommandArgs,
    format: OutputFormat,
    data_dir: &Path,
    options: LoadOptions,
) -> Result<()> {
    let network = super::load(data_dir, options)?;
    let plan = plan_route(&network, &args.to_request())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => print!("{}", format_route_text(&plan, args.show_distance)),
    }
    Ok(())
}

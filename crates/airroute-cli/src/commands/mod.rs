// Each module handles one CLI subcommand; main.rs only parses and dispatches.

pub mod route;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};

use airroute_lib::{load_network, LoadOptions, Network};

/// Load the network from `data_dir`, attaching the directory to any error.
pub fn load(data_dir: &Path, options: LoadOptions) -> Result<Network> {
    load_network(data_dir, options)
        .with_context(|| format!("failed to load dataset from {}", data_dir.display()))
}

//! Stats command handler.

use std::path::Path;

use anyhow::Result;

use airroute_lib::LoadOptions;

use crate::output::{format_summary_text, NetworkSummary, OutputFormat};

/// Handle the `stats` subcommand.
pub fn handle_stats(format: OutputFormat, data_dir: &Path, options: LoadOptions) -> Result<()> {
    let network = super::load(data_dir, options)?;
    let summary = NetworkSummary::from(&network);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print!("{}", format_summary_text(&summary)),
    }
    Ok(())
}

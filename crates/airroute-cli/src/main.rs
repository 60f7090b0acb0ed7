use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airroute_cli::commands::route::{handle_route, RouteCommandArgs};
use airroute_cli::commands::stats::handle_stats;
use airroute_cli::output::OutputFormat;
use airroute_lib::{LoadOptions, UnknownAirportPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airline route finder")]
struct Cli {
    /// Directory holding airlines.csv, airports.csv and routes.csv.
    #[arg(long, env = "AIRROUTE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// How to treat route rows naming an unknown airport: skip or zero.
    #[arg(long, default_value = "skip")]
    unknown_airports: UnknownAirportPolicy,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a connecting route between two airports.
    Route {
        /// Origin IATA code.
        #[arg(long = "from")]
        from: String,
        /// Destination IATA code.
        #[arg(long = "to")]
        to: String,
        /// Also print the accumulated distance.
        #[arg(long)]
        distance: bool,
    },
    /// Print collection sizes and skipped rows of the dataset.
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = LoadOptions::default().with_unknown_airports(cli.unknown_airports);

    match cli.command {
        Command::Route { from, to, distance } => {
            let args = RouteCommandArgs {
                from,
                to,
                show_distance: distance,
            };
            handle_route(&args, cli.format, &cli.data_dir, options)
        }
        Command::Stats => handle_stats(cli.format, &cli.data_dir, options),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

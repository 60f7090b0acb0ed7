//! Dataset ingestion.
//!
//! The dataset is a directory holding three CSV files, each starting with a
//! header row. Sources are always decoded in the order airlines, airports,
//! routes: routes derive their distances and the adjacency from airports, so
//! airports must be complete before the first route row is seen.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, warn};

use crate::decode::UnknownAirportPolicy;
use crate::error::{Error, RecordSource, Result};
use crate::network::{Network, NetworkBuilder};

/// File name of the airline source inside the data directory.
pub const AIRLINES_FILE: &str = "airlines.csv";
/// File name of the airport source inside the data directory.
pub const AIRPORTS_FILE: &str = "airports.csv";
/// File name of the route source inside the data directory.
pub const ROUTES_FILE: &str = "routes.csv";

/// Options controlling how the dataset is ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub unknown_airports: UnknownAirportPolicy,
}

impl LoadOptions {
    pub fn with_unknown_airports(mut self, policy: UnknownAirportPolicy) -> Self {
        self.unknown_airports = policy;
        self
    }
}

impl RecordSource {
    /// File name of this source inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            RecordSource::Airlines => AIRLINES_FILE,
            RecordSource::Airports => AIRPORTS_FILE,
            RecordSource::Routes => ROUTES_FILE,
        }
    }
}

/// Load the network from a data directory.
///
/// A missing source file is treated as an empty source, which then fails the
/// shape validation. A file that exists but cannot be read, or that contains
/// a malformed or short row, aborts the whole load.
pub fn load_network(data_dir: &Path, options: LoadOptions) -> Result<Network> {
    if !data_dir.is_dir() {
        return Err(Error::DataDirectoryNotFound {
            path: data_dir.to_path_buf(),
        });
    }

    debug!(path = %data_dir.display(), policy = %options.unknown_airports, "loading network");

    let mut builder = NetworkBuilder::new(options.unknown_airports);
    for source in [
        RecordSource::Airlines,
        RecordSource::Airports,
        RecordSource::Routes,
    ] {
        let path = data_dir.join(source.file_name());
        match open_source(source, &path)? {
            Some(file) => ingest(&mut builder, source, file)?,
            None => warn!(
                source = %source,
                path = %path.display(),
                "data source missing, treating as empty"
            ),
        }
    }

    builder.build()
}

/// Load the network from in-memory or otherwise already opened sources.
pub fn load_network_from_readers<A, P, R>(
    airlines: A,
    airports: P,
    routes: R,
    options: LoadOptions,
) -> Result<Network>
where
    A: Read,
    P: Read,
    R: Read,
{
    let mut builder = NetworkBuilder::new(options.unknown_airports);
    ingest(&mut builder, RecordSource::Airlines, airlines)?;
    ingest(&mut builder, RecordSource::Airports, airports)?;
    ingest(&mut builder, RecordSource::Routes, routes)?;
    builder.build()
}

fn open_source(source: RecordSource, path: &Path) -> Result<Option<fs::File>> {
    match fs::File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(unreadable(source, path.to_path_buf(), err)),
    }
}

fn unreadable(source: RecordSource, path: PathBuf, reason: io::Error) -> Error {
    Error::SourceUnreadable {
        dataset: source,
        path,
        reason,
    }
}

/// Fields are decoded lossily: bytes that are not valid UTF-8 become U+FFFD
/// instead of rejecting the row.
fn ingest<R: Read>(builder: &mut NetworkBuilder, source: RecordSource, reader: R) -> Result<()> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut record = ByteRecord::new();
    let mut rows = 0usize;
    loop {
        let line = csv_reader.position().line();
        match csv_reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(reason) => {
                return Err(Error::MalformedRecord {
                    dataset: source,
                    line: reason
                        .position()
                        .map(|position| position.line())
                        .unwrap_or(line),
                    reason,
                })
            }
        }

        let fields: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        let row: Vec<&str> = fields.iter().map(|field| field.as_ref()).collect();
        let decoded = match source {
            RecordSource::Airlines => builder.push_airline(&row),
            RecordSource::Airports => builder.push_airport(&row),
            RecordSource::Routes => builder.push_route(&row).map(|_| ()),
        };
        decoded.map_err(|reason| Error::MissingField {
            dataset: source,
            line: record.position().map(|p| p.line()).unwrap_or(line),
            reason,
        })?;
        rows += 1;
    }

    if source == RecordSource::Routes {
        let stats = builder.stats();
        if stats.unknown_airport_routes > 0 {
            warn!(
                skipped_routes = stats.unknown_airport_routes,
                "ignored route rows referencing unknown airports"
            );
        }
        if stats.routes_before_airports > 0 {
            warn!(
                ignored_routes = stats.routes_before_airports,
                "ignored route rows because no airports were loaded"
            );
        }
    }

    debug!(source = %source, rows, "source decoded");
    Ok(())
}

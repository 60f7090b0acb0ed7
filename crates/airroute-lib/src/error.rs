use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::decode::MissingField;

/// Convenient result alias for the AirRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Tabular source a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSource {
    Airlines,
    Airports,
    Routes,
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RecordSource::Airlines => "airlines",
            RecordSource::Airports => "airports",
            RecordSource::Routes => "routes",
        };
        f.write_str(value)
    }
}

/// In-memory collection checked by the post-load shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Airlines,
    Airports,
    Routes,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Collection::Airlines => "Airlines",
            Collection::Airports => "Airports",
            Collection::Routes => "Routes",
        };
        f.write_str(value)
    }
}

/// Broad classification of an [`Error`], used by callers to decide whether a
/// failure is fatal for the process or local to a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source could not be read or a row could not be decoded.
    Ingestion,
    /// The load finished but one of the collections is empty.
    Shape,
    /// The query itself was invalid.
    QueryInput,
    /// The search completed without reaching the destination.
    NoRoute,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset directory does not exist.
    #[error("data directory not found at {path}")]
    DataDirectoryNotFound { path: PathBuf },

    /// A source file exists but could not be read.
    #[error("failed to read {dataset} data from {path}: {reason}")]
    SourceUnreadable {
        dataset: RecordSource,
        path: PathBuf,
        #[source]
        reason: std::io::Error,
    },

    /// The CSV reader rejected a record (bad quoting, uneven field count, ...).
    #[error("malformed {dataset} record at line {line}: {reason}")]
    MalformedRecord {
        dataset: RecordSource,
        line: u64,
        #[source]
        reason: csv::Error,
    },

    /// A row was too short for its decoder.
    #[error("invalid {dataset} record at line {line}: {reason}")]
    MissingField {
        dataset: RecordSource,
        line: u64,
        #[source]
        reason: MissingField,
    },

    /// Raised after loading when one of the collections stayed empty.
    #[error("{collection} data does not exist or invalid")]
    EmptyCollection { collection: Collection },

    /// Origin and destination of a query are the same airport code.
    #[error("Origin and destination are the same")]
    SameOriginAndDestination { code: String },

    /// The origin code is not a known airport.
    #[error("Invalid origin airport")]
    InvalidOrigin { code: String },

    /// The destination code is not a known airport.
    #[error("Invalid dest airport")]
    InvalidDestination { code: String },

    /// The search drained the reachable graph without reaching the destination.
    #[error("Invalid route")]
    RouteNotFound { origin: String, destination: String },
}

impl Error {
    /// Classify the error into its handling category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DataDirectoryNotFound { .. }
            | Error::SourceUnreadable { .. }
            | Error::MalformedRecord { .. }
            | Error::MissingField { .. } => ErrorKind::Ingestion,
            Error::EmptyCollection { .. } => ErrorKind::Shape,
            Error::SameOriginAndDestination { .. }
            | Error::InvalidOrigin { .. }
            | Error::InvalidDestination { .. } => ErrorKind::QueryInput,
            Error::RouteNotFound { .. } => ErrorKind::NoRoute,
        }
    }

    /// `true` for errors that only affect the query that raised them.
    pub fn is_query_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::QueryInput | ErrorKind::NoRoute)
    }
}

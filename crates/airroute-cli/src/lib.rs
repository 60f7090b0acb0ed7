//! Airline route finder CLI library.
//!
//! Subcommand handlers and output formatting used by the `airroute` binary.

pub mod commands;
pub mod output;

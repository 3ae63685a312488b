//! Terminal and NDJSON output for the CLI commands

pub mod json;
pub mod output;

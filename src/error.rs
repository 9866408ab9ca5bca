//! Error types for the catalog pipeline.
//!
//! Only reading the source and writing an export can fail; filtering and
//! aggregation are total functions over a loaded table.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading the catalog source into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read catalog source '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed catalog source: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog source is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Failure while serializing or writing a table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to encode export: {0}")]
    Csv(#[from] csv::Error),
}

// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the extraction pipeline.
///
/// `NoTemperatureDistribution` is informational at the application
/// boundary; every other variant means the report deviated from the
/// expected structure and the run aborts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file does not include temperature distribution time bins")]
    NoTemperatureDistribution,

    #[error("table headers differ for '{metric}', cannot generate time bins")]
    HeaderMismatch { metric: String },

    #[error("cannot parse bin boundary '{text}' as a number")]
    BadBoundary { text: String },

    #[error("cannot parse bin total '{text}' for zone '{zone}' as a number")]
    BadValue { zone: String, text: String },

    #[error("time bin table for '{metric}' / '{zone}' has no bin columns")]
    DegenerateTable { metric: String, zone: String },

    #[error("row has {actual} cells, table has {expected} columns")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

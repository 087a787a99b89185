//! Error taxonomy for the bikeshare core.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the loader and statistics reducers.
#[derive(Error, Debug)]
pub enum Error {
    /// The named city's record source could not be opened or parsed.
    /// Fatal to the current run; no partial results are produced.
    #[error("trip data for {city} is unavailable at {path}: {source}")]
    DataUnavailable {
        city: &'static str,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A start or end timestamp did not match the expected layout.
    #[error("invalid timestamp {value:?} in {city} data: {source}")]
    Timestamp {
        city: &'static str,
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// A demographic or chart reducer was invoked for a city whose schema
    /// lacks the required columns. Callers are expected to check
    /// `City::has_demographics` first; this is the guard for misuse.
    #[error("the {city} dataset has no {field} data")]
    FieldMissing {
        city: &'static str,
        field: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Reducer (e): gender and birth-year statistics.

use crate::error::{Error, Result};
use crate::model::Dataset;
use crate::stats::types::DemographicStats;
use crate::stats::utility::{counts_desc, mode_min_key};

/// Gender counts (descending, nulls skipped) plus the most common,
/// most recent, and earliest birth years, truncated to integers.
///
/// Birth-year mode ties resolve to the smallest year.
///
/// # Errors
///
/// Returns [`Error::FieldMissing`] when invoked for a city whose schema
/// has no Gender/Birth Year columns. The session checks
/// [`City::has_demographics`](crate::model::City::has_demographics)
/// before calling; this guards against misuse.
pub fn demographic_stats(dataset: &Dataset) -> Result<DemographicStats> {
    if !dataset.city().has_demographics() {
        return Err(Error::FieldMissing {
            city: dataset.city().display_name(),
            field: "Gender/Birth Year",
        });
    }

    let trips = dataset.trips();
    let gender_counts = counts_desc(trips.iter().filter_map(|t| t.gender.clone()));

    // Stored as f64 in the source (e.g. 1992.0); reported as integers.
    let years: Vec<i32> = trips
        .iter()
        .filter_map(|t| t.birth_year)
        .map(|year| year as i32)
        .collect();

    Ok(DemographicStats {
        gender_counts,
        common_birth_year: mode_min_key(years.iter().copied()).map(|(year, _)| year),
        most_recent_birth_year: years.iter().copied().max(),
        earliest_birth_year: years.iter().copied().min(),
    })
}

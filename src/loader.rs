//! Loads a city's trip records and applies the month/day filters.

use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{City, Dataset, DayFilter, MonthFilter, RawTrip, Trip};

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads the full record source for `city` from `data_dir`, derives the
/// month/weekday/hour/date columns from each start timestamp, and keeps
/// only the records matching the `month` and `day` filters.
///
/// Filtering is a pure, order-preserving subsetting step; an `All` filter
/// is the identity on that dimension.
///
/// # Errors
///
/// Returns [`Error::DataUnavailable`] if the city's file cannot be opened
/// or a row fails to deserialize, and [`Error::Timestamp`] if a timestamp
/// does not match the expected `YYYY-MM-DD HH:MM:SS` layout. Both are
/// fatal to the current run.
pub fn load(data_dir: &Path, city: City, month: MonthFilter, day: DayFilter) -> Result<Dataset> {
    let path = data_dir.join(city.file_name());
    debug!(path = %path.display(), "Reading trip records");

    let mut reader = csv::Reader::from_path(&path).map_err(|source| Error::DataUnavailable {
        city: city.display_name(),
        path: path.clone(),
        source,
    })?;

    let mut trips = Vec::new();
    for row in reader.deserialize() {
        let raw: RawTrip = row.map_err(|source| Error::DataUnavailable {
            city: city.display_name(),
            path: path.clone(),
            source,
        })?;
        trips.push(parse_trip(city, raw)?);
    }

    let total = trips.len();
    if let Some(number) = month.month_number() {
        trips.retain(|t| t.month == number);
    }
    if let Some(weekday) = day.weekday() {
        trips.retain(|t| t.weekday == weekday);
    }

    info!(
        city = city.display_name(),
        total,
        kept = trips.len(),
        month = month.label(),
        day = day.label(),
        "Loaded trip records"
    );

    Ok(Dataset::new(city, trips))
}

/// Parses one raw CSV row into a [`Trip`], attaching the derived fields.
fn parse_trip(city: City, raw: RawTrip) -> Result<Trip> {
    let start_time = parse_timestamp(city, &raw.start_time)?;
    let end_time = parse_timestamp(city, &raw.end_time)?;

    Ok(Trip {
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
        date: start_time.date(),
        start_time,
        end_time,
        duration_secs: raw.trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year: raw.birth_year,
    })
}

fn parse_timestamp(city: City, value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, START_TIME_FORMAT).map_err(|source| Error::Timestamp {
        city: city.display_name(),
        value: value.to_string(),
        source,
    })
}

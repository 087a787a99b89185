//! Helpers for building in-memory datasets in reducer tests.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::model::{City, Dataset, Trip};

/// Builds a trip starting at `start` (`YYYY-MM-DD HH:MM:SS`).
pub(crate) fn trip(
    start: &str,
    duration_secs: f64,
    start_station: &str,
    end_station: &str,
    user_type: Option<&str>,
    gender: Option<&str>,
    birth_year: Option<f64>,
) -> Trip {
    let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
    Trip {
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
        date: start_time.date(),
        start_time,
        end_time: start_time,
        duration_secs,
        start_station: start_station.to_string(),
        end_station: end_station.to_string(),
        user_type: user_type.map(str::to_string),
        gender: gender.map(str::to_string),
        birth_year,
    }
}

pub(crate) fn dataset(city: City, trips: Vec<Trip>) -> Dataset {
    Dataset::new(city, trips)
}

/// Shorthand for a trip where only the start time matters.
pub(crate) fn trip_at(start: &str) -> Trip {
    trip(start, 60.0, "A", "B", Some("Subscriber"), None, None)
}

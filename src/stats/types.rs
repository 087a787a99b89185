//! Result types produced by the statistics reducers.
//!
//! Optional fields are `None` when the working dataset is empty; reducers
//! never fail on an empty dataset.

use chrono::NaiveDate;
use serde::Serialize;

/// Most frequent travel times: busiest month, weekday, and start hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    /// 1-based month number of the busiest month.
    pub busiest_month: Option<u32>,
    pub busiest_day: Option<String>,
    /// Hour of day (0–23) with the most trip starts.
    pub busiest_hour: Option<u32>,
}

/// Most popular start station, end station, and route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub popular_start: Option<StationCount>,
    pub popular_end: Option<StationCount>,
    pub popular_route: Option<RouteCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationCount {
    pub station: String,
    pub trips: usize,
}

/// The (start, end) station pair with the highest occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCount {
    pub start: String,
    pub end: String,
    pub trips: usize,
}

/// Sum, mean, minimum, and maximum of the trip durations in seconds.
/// The sum of an empty dataset is 0; mean/min/max are undefined (`None`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: Option<f64>,
    pub min_secs: Option<f64>,
    pub max_secs: Option<f64>,
}

/// Frequency of each user type, in descending count order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTypeStats {
    pub counts: Vec<(String, usize)>,
}

/// Gender counts and birth-year aggregates. Only available for cities
/// whose schema carries the Gender and Birth Year columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicStats {
    /// Descending count order, rows without a gender value skipped.
    pub gender_counts: Vec<(String, usize)>,
    pub common_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
    pub earliest_birth_year: Option<i32>,
}

/// One line of the trips-over-time chart: per-calendar-date trip counts
/// for a single category, dates ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSeries {
    pub label: String,
    pub points: Vec<(NaiveDate, u64)>,
}

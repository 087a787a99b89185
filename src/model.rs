//! Core data model: cities, filter enums, and trip records.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use clap::ValueEnum;
use serde::Deserialize;

/// English month names indexed by `month - 1`. The trip data only spans
/// January through June, but display lookup covers the full year.
pub static MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English day names in menu order, Sunday first.
pub static DAY_NAMES: &[&str] = &[
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Zero-based position of a weekday in [`DAY_NAMES`].
pub fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// English name of a weekday, matching [`DAY_NAMES`].
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[day_index(weekday)]
}

/// English name of a 1-based month number, or `None` if out of range.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// One of the three cities with available trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// CSV file name for this city inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Whether the city's source file carries Gender and Birth Year columns.
    /// Washington's schema omits both; that absence is structural, not an
    /// error.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

/// Month filter: a specific month from the data's January–June span, or
/// `All` for no filtering on that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MonthFilter {
    January,
    February,
    March,
    April,
    May,
    June,
    All,
}

impl MonthFilter {
    pub const CHOICES: [MonthFilter; 7] = [
        MonthFilter::January,
        MonthFilter::February,
        MonthFilter::March,
        MonthFilter::April,
        MonthFilter::May,
        MonthFilter::June,
        MonthFilter::All,
    ];

    /// 1-based month number, or `None` for `All`.
    pub fn month_number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            m => Some(m as u32 + 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MonthFilter::All => "All",
            m => MONTH_NAMES[m as usize],
        }
    }
}

/// Day-of-week filter, or `All` for no filtering on that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayFilter {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    All,
}

impl DayFilter {
    pub const CHOICES: [DayFilter; 8] = [
        DayFilter::Sunday,
        DayFilter::Monday,
        DayFilter::Tuesday,
        DayFilter::Wednesday,
        DayFilter::Thursday,
        DayFilter::Friday,
        DayFilter::Saturday,
        DayFilter::All,
    ];

    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DayFilter::Sunday => Some(Weekday::Sun),
            DayFilter::Monday => Some(Weekday::Mon),
            DayFilter::Tuesday => Some(Weekday::Tue),
            DayFilter::Wednesday => Some(Weekday::Wed),
            DayFilter::Thursday => Some(Weekday::Thu),
            DayFilter::Friday => Some(Weekday::Fri),
            DayFilter::Saturday => Some(Weekday::Sat),
            DayFilter::All => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayFilter::All => "All",
            d => DAY_NAMES[d as usize],
        }
    }
}

/// A single row deserialized from a per-city CSV file.
///
/// The files carry an unnamed leading index column, which serde ignores.
/// Gender and Birth Year default to `None` so the Washington file, which
/// has no such columns, deserializes cleanly.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A parsed trip record with the fields derived at load time attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip duration in seconds, non-negative.
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    /// Stored as a float in the source files (e.g. `1992.0`); reported as
    /// an integer by the demographic reducer.
    pub birth_year: Option<f64>,

    /// 1-based month of the start timestamp.
    pub month: u32,
    /// Weekday of the start timestamp.
    pub weekday: Weekday,
    /// Hour of day (0–23) of the start timestamp.
    pub hour: u32,
    /// Calendar date of the start timestamp, used by the chart series.
    pub date: NaiveDate,
}

/// The working dataset: one city's trip records after month/day filtering,
/// in original row order. Immutable once built; every reducer takes a
/// shared reference.
#[derive(Debug)]
pub struct Dataset {
    city: City,
    trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Dataset { city, trips }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

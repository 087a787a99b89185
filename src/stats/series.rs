//! Reducer (f): per-date trip counts feeding the chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Dataset, Trip};
use crate::stats::types::TripSeries;

/// Which two-category column buckets the per-date trip counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum ChartDimension {
    Gender,
    UserType,
}

impl ChartDimension {
    /// Display label, used in the chart title ("Trips by <Dimension>").
    pub fn label(self) -> &'static str {
        match self {
            ChartDimension::Gender => "Gender",
            ChartDimension::UserType => "User Type",
        }
    }

    /// File-name-friendly form of the label.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartDimension::Gender => "gender",
            ChartDimension::UserType => "user_type",
        }
    }

    /// The dimension's two known category values.
    pub fn categories(self) -> [&'static str; 2] {
        match self {
            ChartDimension::Gender => ["Male", "Female"],
            ChartDimension::UserType => ["Customer", "Subscriber"],
        }
    }

    fn value(self, trip: &Trip) -> Option<&str> {
        match self {
            ChartDimension::Gender => trip.gender.as_deref(),
            ChartDimension::UserType => trip.user_type.as_deref(),
        }
    }
}

/// For each of the dimension's two categories, counts trips per calendar
/// start date, producing two parallel series with dates ascending.
///
/// # Errors
///
/// Returns [`Error::FieldMissing`] for a city without demographic columns;
/// the session never offers the chart menu for such a city.
pub fn trip_series(dataset: &Dataset, dimension: ChartDimension) -> Result<[TripSeries; 2]> {
    if !dataset.city().has_demographics() {
        return Err(Error::FieldMissing {
            city: dataset.city().display_name(),
            field: dimension.label(),
        });
    }

    Ok(dimension.categories().map(|category| {
        let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for trip in dataset.trips() {
            if dimension.value(trip) == Some(category) {
                *by_date.entry(trip.date).or_default() += 1;
            }
        }
        TripSeries {
            label: category.to_string(),
            points: by_date.into_iter().collect(),
        }
    }))
}

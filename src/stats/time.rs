//! Reducer (a): most frequent times of travel.

use crate::model::{day_index, Dataset, DAY_NAMES};
use crate::stats::types::TimeStats;
use crate::stats::utility::mode_min_key;

/// Most frequent month, weekday, and start hour across the dataset.
///
/// Tie-break policy: the lowest month number, the earliest day in
/// Sunday-first order, and the lowest hour win.
pub fn time_stats(dataset: &Dataset) -> TimeStats {
    let trips = dataset.trips();

    let busiest_month = mode_min_key(trips.iter().map(|t| t.month)).map(|(month, _)| month);
    let busiest_day = mode_min_key(trips.iter().map(|t| day_index(t.weekday)))
        .map(|(index, _)| DAY_NAMES[index].to_string());
    let busiest_hour = mode_min_key(trips.iter().map(|t| t.hour)).map(|(hour, _)| hour);

    TimeStats {
        busiest_month,
        busiest_day,
        busiest_hour,
    }
}
